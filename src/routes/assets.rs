use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, header},
    response::Response,
};
use rust_embed::RustEmbed;
use std::{
    convert::Infallible,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "/"]
struct Assets;

/// Serves the embedded `static/` directory. Every file gets a strong ETag
/// derived from its content hash, and conditional requests are answered
/// with 304 instead of the payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }
}

fn etag(hash: [u8; 32]) -> String {
    let hex: String = hash.iter().map(|byte| format!("{byte:02x}")).collect();

    format!("\"{hex}\"")
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let path = req.uri().path().to_owned();
        let if_none_match = req
            .headers()
            .get(header::IF_NONE_MATCH)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        Box::pin(async move {
            let Some(content) = Assets::get(&path) else {
                let response = Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .body(Body::from("404 Not Found"))
                    .unwrap();

                return Ok(response);
            };

            let tag = etag(content.metadata.sha256_hash());
            if if_none_match.as_deref() == Some(tag.as_str()) {
                let response = Response::builder()
                    .status(StatusCode::NOT_MODIFIED)
                    .header(header::ETAG, tag)
                    .body(Body::empty())
                    .unwrap();

                return Ok(response);
            }

            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            let response = Response::builder()
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::ETAG, tag)
                .body(Body::from(content.data))
                .unwrap();

            Ok(response)
        })
    }
}
