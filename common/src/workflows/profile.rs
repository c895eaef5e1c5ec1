use std::sync::LazyLock;

use regex::Regex;

use crate::config::Endpoints;
use crate::error::ClientError;
use crate::feedback::{AfterSubmit, Notice, Rendering};
use crate::form::FormRequest;
use crate::http::Method;
use crate::model::user::UserId;
use crate::outcome::{diagnostic_text, ResponseKind, SubmissionOutcome};
use crate::pipeline::{Encoding, Endpoint};
use crate::requests::update_user::{ALL, EMAIL, PASSWORD};

use super::{or_fallback, required, Workflow};

pub const UPDATED_MESSAGE: &str = "Vos informations ont été mises à jour avec succès !";
pub const UPDATE_FAILED_MESSAGE: &str = "Une erreur s'est produite lors de la mise à jour.";
pub const UNREACHABLE_MESSAGE: &str = "Impossible de contacter le serveur.";
pub const BAD_EMAIL_MESSAGE: &str = "Email invalide";
pub const SHORT_PASSWORD_MESSAGE: &str = "Le mot de passe doit contenir au moins 6 caractères";

const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Profile edit: `PUT /api/users/update/{userId}` with
/// `{userName, email, password}` as JSON.
///
/// Blank fields are sent as-is and left to the server; non-blank ones are
/// checked against the same rules the server applies.
pub struct UpdateProfile {
    endpoints: Endpoints,
}

impl UpdateProfile {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

fn validate(fields: &FormRequest) -> Result<(), ClientError> {
    if let Some(email) = fields.get(EMAIL).map(str::trim).filter(|e| !e.is_empty()) {
        if !EMAIL_RE.is_match(email) {
            return Err(ClientError::InvalidInput(BAD_EMAIL_MESSAGE.to_string()));
        }
    }
    if let Some(password) = fields.get(PASSWORD).filter(|p| !p.is_empty()) {
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ClientError::InvalidInput(SHORT_PASSWORD_MESSAGE.to_string()));
        }
    }
    Ok(())
}

impl Workflow for UpdateProfile {
    fn name(&self) -> &'static str {
        "update-profile"
    }

    fn requires_identity(&self) -> bool {
        true
    }

    fn prepare(
        &self,
        mut fields: FormRequest,
        identity: Option<&UserId>,
        _action: Option<&str>,
    ) -> Result<(Endpoint, FormRequest), ClientError> {
        let user = required(identity)?;
        fields.retain_only(&ALL);
        validate(&fields)?;

        let endpoint = Endpoint {
            method: Method::Put,
            url: self.endpoints.update_user(user),
            encoding: Encoding::Json,
            response: ResponseKind::Text,
        };
        Ok((endpoint, fields))
    }

    fn render(&self, outcome: &SubmissionOutcome) -> Rendering {
        match outcome {
            SubmissionOutcome::Success { payload, .. } => {
                let text = payload.as_text().unwrap_or_default();
                Rendering::new(
                    Notice::success(or_fallback(text, UPDATED_MESSAGE)),
                    AfterSubmit::Stay,
                )
            }
            SubmissionOutcome::Failure { status: None, .. } => {
                Rendering::stay(Notice::error(UNREACHABLE_MESSAGE))
            }
            SubmissionOutcome::Failure { message, .. } => Rendering::stay(Notice::error(
                or_fallback(&diagnostic_text(message), UPDATE_FAILED_MESSAGE),
            )),
        }
    }
}
