//! OtpVerify Android library
//!
//! Exposes app-signature hashing and OTP extraction to Java/Kotlin hosts
//! through JNI. The host side queries the package manager for signature
//! blobs and passes their chars strings across the boundary.

use jni::sys::jstring;
use jni::JNIEnv;

mod error;
mod signature;

pub use error::*;
pub use signature::*;

/// JNI error handling helper
fn to_jni_result<T>(env: &mut JNIEnv, result: Result<T, OtpVerifyAndroidError>) -> Option<T>
where
    T: std::fmt::Debug,
{
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            let _ = env.throw_new("java/lang/RuntimeException", e.to_string());
            None
        }
    }
}

/// Convert a Rust String into a Java String
fn to_java_string(env: &mut JNIEnv, s: String) -> Result<jstring, OtpVerifyAndroidError> {
    env.new_string(s)
        .map(|js| js.into_raw())
        .map_err(|e| OtpVerifyAndroidError::JniError(format!("Failed to create Java string: {}", e)))
}
