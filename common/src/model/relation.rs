use serde::{Deserialize, Serialize};

use crate::model::user::UserId;

/// One entry of `GET /api/relation/all/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedUser {
    pub id: UserId,
    pub name: String,
}
