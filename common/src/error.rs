use thiserror::Error;

/// Every failure the client layer can run into.
///
/// None of these are fatal to the page: controllers catch them at the event
/// handler boundary and turn them into a visible notice or a console line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// A required element was absent when a feature was mounted.
    #[error("required element not found: {0}")]
    MissingDomDependency(String),

    /// No current user identifier could be obtained.
    #[error("current user could not be resolved: {0}")]
    IdentityUnresolved(String),

    /// The request never produced a response.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The server answered with a non-success status.
    #[error("server rejected the request ({status}): {message}")]
    ServerRejected { status: u16, message: String },

    /// The server answered with a success status but the body did not decode.
    #[error("malformed response ({status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    /// Client-side validation refused the form before sending it.
    #[error("{0}")]
    InvalidInput(String),

    /// A field would have been overwritten without an explicit intent.
    #[error("field `{0}` is already present in the form")]
    FieldConflict(String),
}
