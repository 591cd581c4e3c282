use thiserror::Error;

/// Failures reported by a user record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Account errors surfaced to callers of the account operations
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No email for sign in")]
    MissingEmail,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
