use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use std::{collections::HashMap, convert::Infallible};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";
pub const NOT_FOUND: &str = "Not found";

pub const THEME_COOKIE: &str = "theme";

pub(crate) mod filters {
    /// Swaps a full-size meal thumbnail URL for the small preview variant
    /// the upstream API serves under the `/preview` suffix.
    #[askama::filter_fn]
    pub fn preview(value: &str, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(format!("{value}/preview"))
    }

    #[askama::filter_fn]
    pub fn theme(_value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let theme = askama::get_value::<String>(values, "theme")
            .expect("Unable to get theme from askama::get_value");

        Ok(theme.to_string())
    }
}

pub struct Template {
    theme: String,
    config: crate::config::Config,
}

impl Template {
    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("theme", Box::new(self.theme.to_owned()));
        values.insert("config", Box::new(self.config.clone()));

        #[cfg(debug_assertions)]
        {
            values.insert("is_dev", Box::new(true));
        }
        #[cfg(not(debug_assertions))]
        {
            values.insert("is_dev", Box::new(false));
        }

        template.render_with_values(&values)
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match self.render_with_values(template) {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = parts
            .extract::<CookieJar>()
            .await
            .expect("Unable to extract cookies");

        let theme = jar
            .get(THEME_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .filter(|value| value == "dark")
            .unwrap_or_else(|| "light".to_owned());

        Ok(Template {
            theme,
            config: state.config.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        match $result.await {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render($crate::template::ServerTemplate)
                    .into_response();
            }
        }
    };

    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render($crate::template::ServerTemplate)
                    .into_response();
            }
        }
    };

    (opt: $result:expr, $template:expr) => {
        match $result.await {
            Ok(Some(r)) => r,
            Ok(_) => {
                return $template
                    .render($crate::template::NotFoundTemplate)
                    .into_response()
            }
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render($crate::template::ServerTemplate)
                    .into_response();
            }
        }
    };
}

#[derive(askama::Template)]
#[template(path = "partials/toast-success.html")]
pub struct ToastSuccessTemplate<'a> {
    pub original: Option<&'a str>,
    pub message: &'a str,
    pub description: Option<&'a str>,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub original: Option<&'a str>,
    pub message: &'a str,
    pub description: Option<&'a str>,
}

#[macro_export]
macro_rules! try_response {
    // Internal helper for rendering error responses
    (@render $template:expr, $fallback:expr, $message:expr) => {
        match $fallback {
            Some(t) => {
                return $template
                    .render($crate::template::ToastErrorTemplate {
                        original: Some(&$template.to_string(t)),
                        message: $message,
                        description: None,
                    })
                    .into_response();
            }
            _ => {
                return (
                    [("ts-swap", "skip")],
                    $template.render($crate::template::ToastErrorTemplate {
                        original: None,
                        message: $message,
                        description: None,
                    }),
                )
                    .into_response();
            }
        }
    };

    // Result<T, Error>
    ($result:expr, $template:expr, $fallback:expr) => {
        $crate::try_response!(sync: $result.await, $template, $fallback)
    };

    // Result<Option<T>, Error>
    (opt: $result:expr, $template:expr, $fallback:expr) => {
        $crate::try_response!(sync opt: $result.await, $template, $fallback)
    };

    // Result<T, anyhow::Error> - all errors treated as server errors
    (anyhow: $result:expr, $template:expr, $fallback:expr) => {
        $crate::try_response!(sync anyhow: $result.await, $template, $fallback)
    };

    // Result<Option<T>, anyhow::Error> - all errors treated as server errors
    (anyhow_opt: $result:expr, $template:expr, $fallback:expr) => {
        $crate::try_response!(sync anyhow_opt: $result.await, $template, $fallback)
    };

    // Result<T, Error>
    ($result:expr, $template:expr) => {
        $crate::try_response!(sync: $result.await, $template, None::<$crate::template::NotFoundTemplate>)
    };

    // Result<Option<T>, Error>
    (opt: $result:expr, $template:expr) => {
        $crate::try_response!(sync opt: $result.await, $template, None::<$crate::template::NotFoundTemplate>)
    };

    // Result<T, anyhow::Error> - all errors treated as server errors
    (anyhow: $result:expr, $template:expr) => {
        $crate::try_response!(sync anyhow: $result.await, $template, None::<$crate::template::NotFoundTemplate>)
    };

    // Result<Option<T>, anyhow::Error> - all errors treated as server errors
    (anyhow_opt: $result:expr, $template:expr) => {
        $crate::try_response!(sync anyhow_opt: $result.await, $template, None::<$crate::template::NotFoundTemplate>)
    };

    (sync: $result:expr, $template:expr) => {
        $crate::try_response!(sync: $result, $template, None::<$crate::template::NotFoundTemplate>)
    };

    (sync opt: $result:expr, $template:expr) => {
        $crate::try_response!(sync opt: $result, $template, None::<$crate::template::NotFoundTemplate>)
    };

    (sync anyhow: $result:expr, $template:expr) => {
        $crate::try_response!(sync anyhow: $result, $template, None::<$crate::template::NotFoundTemplate>)
    };

    (sync anyhow_opt: $result:expr, $template:expr) => {
        $crate::try_response!(sync anyhow_opt: $result, $template, None::<$crate::template::NotFoundTemplate>)
    };

    (sync: $result:expr, $template:expr, $fallback:expr) => {
        match $result {
            Ok(r) => r,
            Err(recipefinder_shared::Error::Server(err)) => {
                tracing::error!("{err}");
                $crate::try_response!(@render $template, $fallback, $crate::template::SERVER_ERROR_MESSAGE)
            }
            Err(recipefinder_shared::Error::Unknown(err)) => {
                tracing::error!("{err}");
                $crate::try_response!(@render $template, $fallback, $crate::template::SERVER_ERROR_MESSAGE)
            }
            Err(recipefinder_shared::Error::NotFound) => {
                $crate::try_response!(@render $template, $fallback, $crate::template::NOT_FOUND)
            }
            Err(err) => {
                $crate::try_response!(@render $template, $fallback, err.to_string().as_str())
            }
        }
    };

    (sync opt: $result:expr, $template:expr, $fallback:expr) => {
        match $result {
            Ok(Some(r)) => r,
            Ok(_) => {
                $crate::try_response!(@render $template, $fallback, $crate::template::NOT_FOUND)
            }
            Err(recipefinder_shared::Error::Server(err)) => {
                tracing::error!("{err}");
                $crate::try_response!(@render $template, $fallback, $crate::template::SERVER_ERROR_MESSAGE)
            }
            Err(recipefinder_shared::Error::Unknown(err)) => {
                tracing::error!("{err}");
                $crate::try_response!(@render $template, $fallback, $crate::template::SERVER_ERROR_MESSAGE)
            }
            Err(recipefinder_shared::Error::NotFound) => {
                $crate::try_response!(@render $template, $fallback, $crate::template::NOT_FOUND)
            }
            Err(err) => {
                $crate::try_response!(@render $template, $fallback, err.to_string().as_str())
            }
        }
    };

    (sync anyhow: $result:expr, $template:expr, $fallback:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");
                $crate::try_response!(@render $template, $fallback, $crate::template::SERVER_ERROR_MESSAGE)
            }
        }
    };

    (sync anyhow_opt: $result:expr, $template:expr, $fallback:expr) => {
        match $result {
            Ok(Some(r)) => r,
            Ok(_) => {
                $crate::try_response!(@render $template, $fallback, $crate::template::NOT_FOUND)
            }
            Err(err) => {
                tracing::error!("{err}");
                $crate::try_response!(@render $template, $fallback, $crate::template::SERVER_ERROR_MESSAGE)
            }
        }
    };
}
