use thiserror::Error;

/// Error type for signature hashing and registry lookups
#[derive(Error, Debug)]
pub enum Error {
    /// The registry has no signing information for the package
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    /// Certificate text was not valid hex
    #[error("Invalid certificate encoding: {0}")]
    InvalidCertificate(#[from] hex::FromHexError),

    /// Value is not a well-formed 11-character signature hash
    #[error("Invalid signature hash: {0}")]
    InvalidHash(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
