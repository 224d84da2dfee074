use thiserror::Error;

/// Failure kinds for a single transfer attempt.
///
/// Every storage failure is folded into one of these three before it
/// reaches the transfer operations; nothing else crosses that boundary.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The local file (upload) or the destination path / remote object
    /// (download) could not be located at transfer time.
    #[error("not found: {0}")]
    NotFound(String),

    /// The storage client cannot authenticate, or a required
    /// configuration value was absent at call time.
    #[error("credentials not available")]
    Credentials,

    /// Anything else the storage client reported, carried by description.
    #[error("{0}")]
    Transfer(String),
}

pub type Result<T> = std::result::Result<T, TransferError>;
