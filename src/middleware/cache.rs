use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

/// Static assets carry a content-hash ETag, so clients may cache them for a
/// day and revalidate cheaply. Rendered pages carry live planner state and
/// must never be cached.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_asset = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    if is_asset {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=86400"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    }

    response
}
