use crate::config::Endpoints;
use crate::error::ClientError;
use crate::feedback::{AfterSubmit, Notice, Rendering};
use crate::form::{FormRequest, Shadow};
use crate::http::Method;
use crate::model::user::UserId;
use crate::outcome::{Payload, ResponseKind, SubmissionOutcome, CONNECTIVITY_MESSAGE};
use crate::pipeline::{Encoding, Endpoint};
use crate::requests::add_relation::{EMAIL, USER_ID};

use super::{or_fallback, required, Workflow};

/// Shown only when the server confirms with an empty body; the server's
/// own text is authoritative otherwise.
pub const ADDED_MESSAGE: &str = "Relation ajoutée à votre liste d'amis.";
pub const EMPTY_EMAIL_MESSAGE: &str = "Veuillez saisir l'adresse e-mail de votre relation.";

/// "Add a friend by email": `POST /api/relation/add` with `{userId, email}`.
pub struct AddRelation {
    endpoints: Endpoints,
}

impl AddRelation {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl Workflow for AddRelation {
    fn name(&self) -> &'static str {
        "add-relation"
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
        if fields.get(EMAIL).is_none_or(|email| email.trim().is_empty()) {
            return Err(ClientError::InvalidInput(EMPTY_EMAIL_MESSAGE.to_string()));
        }

        fields.retain_only(&[USER_ID, EMAIL]);
        fields.inject(USER_ID, user.as_str(), Shadow::Replace)?;

        let endpoint = Endpoint {
            method: Method::Post,
            url: self.endpoints.relation_add(),
            encoding: Encoding::UrlEncoded,
            response: ResponseKind::Text,
        };
        Ok((endpoint, fields))
    }

    fn render(&self, outcome: &SubmissionOutcome) -> Rendering {
        match outcome {
            SubmissionOutcome::Success { payload, .. } => {
                let text = match payload {
                    Payload::Text(text) => or_fallback(text, ADDED_MESSAGE),
                    Payload::Json(_) => ADDED_MESSAGE.to_string(),
                };
                Rendering::new(Notice::success(text), AfterSubmit::ResetForm)
            }
            SubmissionOutcome::Failure { status: None, .. } => {
                Rendering::stay(Notice::error(CONNECTIVITY_MESSAGE))
            }
            SubmissionOutcome::Failure { message, .. } if message.trim().is_empty() => {
                Rendering::stay(Notice::error(CONNECTIVITY_MESSAGE))
            }
            SubmissionOutcome::Failure { message, .. } => {
                Rendering::stay(Notice::error(format!("Erreur : {}", message.trim())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow() -> AddRelation {
        AddRelation::new(Endpoints::new(""))
    }

    #[test]
    fn injects_user_id_after_email() {
        let user = UserId::parse("3").unwrap();
        let fields = FormRequest::from_pairs([("email", "bob@x.com")]).unwrap();
        let (endpoint, body) = workflow().prepare(fields, Some(&user), None).unwrap();
        assert_eq!(endpoint.url, "/api/relation/add");
        assert_eq!(body.to_urlencoded(), "email=bob%40x.com&userId=3");
    }

    #[test]
    fn blank_email_is_refused() {
        let user = UserId::parse("3").unwrap();
        let fields = FormRequest::from_pairs([("email", "  ")]).unwrap();
        let err = workflow().prepare(fields, Some(&user), None).unwrap_err();
        assert_eq!(err, ClientError::InvalidInput(EMPTY_EMAIL_MESSAGE.to_string()));
    }

    #[test]
    fn server_text_is_authoritative_on_success() {
        let rendering = workflow().render(&SubmissionOutcome::Success {
            payload: Payload::Text("Relation ajoutée avec Bob".to_string()),
            redirect: None,
        });
        assert_eq!(rendering.notice, Notice::success("Relation ajoutée avec Bob"));
        assert_eq!(rendering.after, AfterSubmit::ResetForm);
    }

    #[test]
    fn empty_success_body_uses_fallback_sentence() {
        let rendering = workflow().render(&SubmissionOutcome::Success {
            payload: Payload::Text(String::new()),
            redirect: None,
        });
        assert_eq!(rendering.notice, Notice::success(ADDED_MESSAGE));
    }
}
