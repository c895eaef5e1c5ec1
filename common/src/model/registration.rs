use serde::Deserialize;

/// JSON answer of `POST /api/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationReply {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl RegistrationReply {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}
