use serde::{Deserialize, Serialize};

use crate::model::user::UserId;

/// A transaction record as returned by `GET /api/transactions/allByUser/{userId}`.
///
/// `amountWithFee` is optional so older payloads without it still decode.
/// Other members, such as `transactionDate`, are ignored whatever their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub receiver_name: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub amount_with_fee: Option<f64>,
}

/// Success body of the transaction creation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionReceipt {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}
