//! The concrete form workflows of the site.
//!
//! Each workflow decides three things and nothing else: whether it needs the
//! current user, what request a set of form fields turns into, and how an
//! outcome is shown. The shared mechanics live in
//! [`crate::controller::SubmissionController`].

mod profile;
mod registration;
mod relation;
mod transaction;

pub use profile::UpdateProfile;
pub use registration::Register;
pub use relation::AddRelation;
pub use transaction::CreateTransaction;

use crate::error::ClientError;
use crate::feedback::{Notice, Rendering};
use crate::form::FormRequest;
use crate::model::user::UserId;
use crate::outcome::SubmissionOutcome;
use crate::pipeline::Endpoint;

pub const IDENTITY_MESSAGE: &str = "Impossible de récupérer l'utilisateur actuel.";

pub trait Workflow {
    fn name(&self) -> &'static str;

    fn requires_identity(&self) -> bool;

    /// Turns the captured fields into the endpoint and body to send.
    /// `identity` is `Some` whenever `requires_identity` is true; `action` is
    /// the form's declared `action` attribute.
    fn prepare(
        &self,
        fields: FormRequest,
        identity: Option<&UserId>,
        action: Option<&str>,
    ) -> Result<(Endpoint, FormRequest), ClientError>;

    fn render(&self, outcome: &SubmissionOutcome) -> Rendering;

    /// Notice shown when the submission stops before any request.
    fn abort_notice(&self, err: &ClientError) -> Notice {
        match err {
            ClientError::IdentityUnresolved(_) => Notice::error(IDENTITY_MESSAGE),
            ClientError::InvalidInput(message) => Notice::error(message.clone()),
            _ => Notice::error(crate::outcome::CONNECTIVITY_MESSAGE),
        }
    }
}

/// Identity argument of workflows that declared `requires_identity`.
fn required(identity: Option<&UserId>) -> Result<&UserId, ClientError> {
    identity.ok_or_else(|| ClientError::IdentityUnresolved("no identity supplied".to_string()))
}

/// `text` trimmed, or `fallback` when it is blank.
fn or_fallback(text: &str, fallback: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
