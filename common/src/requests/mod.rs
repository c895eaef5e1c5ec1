//! Field names the backend expects in request bodies.
//!
//! Pages name their inputs after these, and the workflows inject or select
//! fields by the same names when they build a `FormRequest`.

/// `POST /api/relation/add` (URL-encoded).
pub mod add_relation {
    pub const USER_ID: &str = "userId";
    pub const EMAIL: &str = "email";
}

/// `POST /api/transactions/create` (URL-encoded).
pub mod create_transaction {
    pub const SENDER_ID: &str = "senderId";
    pub const RECEIVER_ID: &str = "receiverId";
    pub const AMOUNT: &str = "amount";
    pub const DESCRIPTION: &str = "description";
}

/// `PUT /api/users/update/{userId}` (JSON).
pub mod update_user {
    pub const USER_NAME: &str = "userName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";

    pub const ALL: [&str; 3] = [USER_NAME, EMAIL, PASSWORD];
}
