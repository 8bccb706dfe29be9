//! Android library error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OtpVerifyAndroidError {
    #[error("JNI error: {0}")]
    JniError(String),

    #[error("Core error: {0}")]
    CoreError(#[from] otpverify_core::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
