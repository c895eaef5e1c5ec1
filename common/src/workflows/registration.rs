use crate::config::Endpoints;
use crate::error::ClientError;
use crate::feedback::{AfterSubmit, Notice, Rendering};
use crate::form::FormRequest;
use crate::http::Method;
use crate::model::registration::RegistrationReply;
use crate::model::user::UserId;
use crate::outcome::{diagnostic_text, Payload, ResponseKind, SubmissionOutcome};
use crate::pipeline::{Encoding, Endpoint};

use super::Workflow;

pub const REGISTER_FAILED_MESSAGE: &str = "An error occurred. Please try again.";
pub const REGISTERED_MESSAGE: &str = "Registration successful.";

/// Account creation: `POST /api/register` with the whole form URL-encoded.
pub struct Register {
    endpoints: Endpoints,
}

impl Register {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl Workflow for Register {
    fn name(&self) -> &'static str {
        "register"
    }

    fn requires_identity(&self) -> bool {
        false
    }

    fn prepare(
        &self,
        fields: FormRequest,
        _identity: Option<&UserId>,
        _action: Option<&str>,
    ) -> Result<(Endpoint, FormRequest), ClientError> {
        let endpoint = Endpoint {
            method: Method::Post,
            url: self.endpoints.register(),
            encoding: Encoding::UrlEncoded,
            response: ResponseKind::Json,
        };
        Ok((endpoint, fields))
    }

    fn render(&self, outcome: &SubmissionOutcome) -> Rendering {
        match outcome {
            SubmissionOutcome::Success {
                redirect: Some(target),
                ..
            } => Rendering::new(
                Notice::success(REGISTERED_MESSAGE),
                AfterSubmit::Navigate(target.clone()),
            ),
            SubmissionOutcome::Success {
                payload: Payload::Json(value),
                ..
            } => match serde_json::from_value::<RegistrationReply>(value.clone()) {
                Ok(reply) if reply.is_success() => Rendering::new(
                    Notice::success(non_blank(reply.message, REGISTERED_MESSAGE)),
                    AfterSubmit::ResetForm,
                ),
                Ok(reply) => {
                    Rendering::stay(Notice::error(non_blank(reply.message, REGISTER_FAILED_MESSAGE)))
                }
                Err(e) => {
                    log::error!("unexpected registration reply: {}", e);
                    Rendering::stay(Notice::error(REGISTER_FAILED_MESSAGE))
                }
            },
            SubmissionOutcome::Success { .. } => {
                Rendering::stay(Notice::error(REGISTER_FAILED_MESSAGE))
            }
            SubmissionOutcome::Failure { message, .. } => Rendering::stay(Notice::error(
                non_blank(diagnostic_text(message), REGISTER_FAILED_MESSAGE),
            )),
        }
    }
}

fn non_blank(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
