//! Transport seam between the workflows and the browser's `fetch`.

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    UrlEncoded(String),
    Json(String),
}

impl Body {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Body::Empty => None,
            Body::UrlEncoded(_) => Some("application/x-www-form-urlencoded"),
            Body::Json(_) => Some("application/json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Body,
    /// Send cookies even when the API base is another origin.
    pub include_credentials: bool,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: Body::Empty,
            include_credentials: false,
        }
    }

    pub fn with_credentials(mut self) -> Self {
        self.include_credentials = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    /// Final URL when `fetch` followed a redirect.
    pub redirected_to: Option<String>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            redirected_to: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one request. `Err` means no response was received at all; any
/// HTTP status, including 4xx/5xx, is an `Ok(HttpResponse)`.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

#[async_trait(?Send)]
impl<T: HttpClient + ?Sized> HttpClient for Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        (**self).send(request).await
    }
}

/// GETs `request` and decodes a JSON body, mapping non-success statuses to
/// `ServerRejected` and undecodable bodies to `MalformedResponse`.
pub async fn get_json<C, T>(client: &C, request: HttpRequest) -> Result<T, ClientError>
where
    C: HttpClient + ?Sized,
    T: DeserializeOwned,
{
    let url = request.url.clone();
    let response = client.send(request).await?;
    if !response.is_success() {
        return Err(ClientError::ServerRejected {
            status: response.status,
            message: response.body.trim().to_string(),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| {
        log::debug!("undecodable body from {}: {}", url, e);
        ClientError::MalformedResponse {
            status: response.status,
            reason: e.to_string(),
        }
    })
}
