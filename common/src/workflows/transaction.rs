use crate::config::Endpoints;
use crate::error::ClientError;
use crate::feedback::{AfterSubmit, Notice, Rendering};
use crate::form::{FormRequest, Shadow};
use crate::http::Method;
use crate::model::transaction::TransactionReceipt;
use crate::model::user::UserId;
use crate::outcome::{diagnostic_text, Payload, ResponseKind, SubmissionOutcome};
use crate::pipeline::{Encoding, Endpoint};
use crate::requests::create_transaction::{AMOUNT, RECEIVER_ID, SENDER_ID};

use super::{or_fallback, required, Workflow};

pub const CREATED_MESSAGE: &str = "Transaction créée avec succès !";
pub const RETRY_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";
pub const NO_RECEIVER_MESSAGE: &str = "Veuillez sélectionner une relation.";
pub const BAD_AMOUNT_MESSAGE: &str = "Le montant doit être un nombre supérieur à zéro.";

/// Money transfer: the transaction form's fields plus `senderId`, posted
/// URL-encoded to the form's `action`. Success reloads the page so the
/// history and balance are fetched again.
pub struct CreateTransaction {
    endpoints: Endpoints,
}

impl CreateTransaction {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl Workflow for CreateTransaction {
    fn name(&self) -> &'static str {
        "create-transaction"
    }

    fn requires_identity(&self) -> bool {
        true
    }

    fn prepare(
        &self,
        mut fields: FormRequest,
        identity: Option<&UserId>,
        action: Option<&str>,
    ) -> Result<(Endpoint, FormRequest), ClientError> {
        let sender = required(identity)?;

        if fields.get(RECEIVER_ID).is_some_and(|r| r.trim().is_empty()) {
            return Err(ClientError::InvalidInput(NO_RECEIVER_MESSAGE.to_string()));
        }
        if let Some(amount) = fields.get(AMOUNT) {
            let valid = amount
                .trim()
                .replace(',', ".")
                .parse::<f64>()
                .is_ok_and(|value| value.is_finite() && value > 0.0);
            if !valid {
                return Err(ClientError::InvalidInput(BAD_AMOUNT_MESSAGE.to_string()));
            }
        }

        fields.inject(SENDER_ID, sender.as_str(), Shadow::Replace)?;

        let url = action
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.endpoints.transaction_create());
        let endpoint = Endpoint {
            method: Method::Post,
            url,
            encoding: Encoding::UrlEncoded,
            // Read as text: any 2xx means the transfer went through, whatever
            // the body looks like.
            response: ResponseKind::Text,
        };
        Ok((endpoint, fields))
    }

    fn render(&self, outcome: &SubmissionOutcome) -> Rendering {
        match outcome {
            SubmissionOutcome::Success {
                redirect: Some(_), ..
            } => Rendering::new(Notice::success(CREATED_MESSAGE), AfterSubmit::Reload),
            SubmissionOutcome::Success { payload, .. } => {
                let receipt = match payload {
                    Payload::Json(value) => {
                        serde_json::from_value::<TransactionReceipt>(value.clone()).ok()
                    }
                    Payload::Text(text) => serde_json::from_str::<TransactionReceipt>(text).ok(),
                };
                let message = receipt
                    .and_then(|receipt| receipt.message)
                    .map(|m| or_fallback(&m, CREATED_MESSAGE))
                    .unwrap_or_else(|| CREATED_MESSAGE.to_string());
                Rendering::new(Notice::success(message), AfterSubmit::Reload)
            }
            SubmissionOutcome::Failure { status: None, .. } => {
                Rendering::stay(Notice::error(RETRY_MESSAGE))
            }
            SubmissionOutcome::Failure { message, .. } => {
                let detail = diagnostic_text(message);
                if detail.is_empty() {
                    Rendering::stay(Notice::error(RETRY_MESSAGE))
                } else {
                    Rendering::stay(Notice::error(format!(
                        "Erreur lors de la création de la transaction : {}",
                        detail
                    )))
                }
            }
        }
    }
}
