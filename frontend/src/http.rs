//! `HttpClient` backed by `fetch` through gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use common::error::ClientError;
use common::http::{Body, HttpClient, HttpRequest, HttpResponse, Method};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClient;

#[async_trait(?Send)]
impl HttpClient for GlooClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        if request.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }
        if let Some(content_type) = request.body.content_type() {
            builder = builder.header("Content-Type", content_type);
        }

        let sent = match request.body {
            Body::Empty => builder.send().await,
            Body::UrlEncoded(text) | Body::Json(text) => match builder.body(text) {
                Ok(prepared) => prepared.send().await,
                Err(err) => Err(err),
            },
        };
        let response = sent.map_err(|err| ClientError::NetworkFailure(err.to_string()))?;

        let status = response.status();
        let redirected_to = response.redirected().then(|| response.url());
        // A body that cannot be read is treated as empty; the status still decides.
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse {
            status,
            body,
            redirected_to,
        })
    }
}
