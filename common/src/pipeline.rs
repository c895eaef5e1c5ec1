//! Serializes a `FormRequest`, performs the call and maps the answer to a
//! `SubmissionOutcome`.
//!
//! Responsibilities
//! - Encode the fields with the endpoint's fixed encoding (URL-encoded or JSON).
//! - Send exactly one request through the injected `HttpClient`.
//! - Turn a missing response into the generic connectivity failure and any
//!   received response into a `SubmissionOutcome` via
//!   [`SubmissionOutcome::from_response`].
//!
//! Rendering the outcome is left to the workflow that asked for the call.

use crate::error::ClientError;
use crate::form::FormRequest;
use crate::http::{Body, HttpClient, HttpRequest, Method};
use crate::outcome::{ResponseKind, SubmissionOutcome};

/// Request body encoding. Fixed per endpoint, never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    UrlEncoded,
    Json,
}

impl Encoding {
    /// Builds the request body for `form`.
    ///
    /// # Arguments
    /// * `form` - Fields in the order they will appear in the body.
    ///
    /// # Returns
    /// The body tagged with its content type, or `ClientError::InvalidInput`
    /// if the JSON serializer refuses the fields.
    pub fn encode(self, form: &FormRequest) -> Result<Body, ClientError> {
        match self {
            Encoding::UrlEncoded => Ok(Body::UrlEncoded(form.to_urlencoded())),
            Encoding::Json => form.to_json().map(Body::Json),
        }
    }
}

/// Where and how one workflow sends its form.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub url: String,
    pub encoding: Encoding,
    pub response: ResponseKind,
}

/// Stateless sender shared by every workflow of a controller.
pub struct SubmissionPipeline<C> {
    client: C,
}

impl<C: HttpClient> SubmissionPipeline<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Sends `form` to `endpoint`.
    ///
    /// # Arguments
    /// * `endpoint` - Method, URL, body encoding and expected response kind.
    /// * `form` - Captured fields plus whatever the workflow injected.
    ///
    /// # Returns
    /// `Ok` with the outcome for every request that was sent, including
    /// transport and server failures. Only a body that cannot be encoded is
    /// an `Err`, and in that case nothing goes over the network.
    pub async fn submit(
        &self,
        endpoint: &Endpoint,
        form: &FormRequest,
    ) -> Result<SubmissionOutcome, ClientError> {
        let request = HttpRequest {
            method: endpoint.method,
            url: endpoint.url.clone(),
            body: endpoint.encoding.encode(form)?,
            include_credentials: false,
        };
        log::debug!("{:?} {} ({} fields)", request.method, request.url, form.len());

        match self.client.send(request).await {
            Ok(response) => {
                log::debug!("{} answered {}", endpoint.url, response.status);
                Ok(SubmissionOutcome::from_response(endpoint.response, response))
            }
            Err(err) => {
                log::error!("request to {} failed: {}", endpoint.url, err);
                Ok(SubmissionOutcome::connectivity())
            }
        }
    }
}
