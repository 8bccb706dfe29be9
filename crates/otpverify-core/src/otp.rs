//! OTP message utilities
//!
//! Helpers for consuming SMS retriever messages. A retriever message starts
//! with `<#>` and carries the app-signature hash as its final token:
//!
//! ```text
//! <#> Your OTP is 123456 L1lD8GP/5Eo
//! ```

use regex::Regex;

use crate::types::SignatureHash;

/// Prefix carried by SMS retriever messages
pub const RETRIEVER_PREFIX: &str = "<#>";

/// Extract an OTP of a known digit count from a message body
///
/// Returns the first occurrence of `num_digits` consecutive ASCII digits
/// (a longer digit run yields its leading `num_digits` digits). A
/// `num_digits` of zero extracts nothing.
///
/// # Example
/// ```
/// use otpverify_core::otp::extract_otp;
///
/// let otp = extract_otp("<#> Your OTP is 123456 L1lD8GP/5Eo", 6);
/// assert_eq!(otp.as_deref(), Some("123456"));
/// ```
pub fn extract_otp(message: &str, num_digits: usize) -> Option<String> {
    if num_digits == 0 {
        return None;
    }

    let pattern = Regex::new(&format!("[0-9]{{{}}}", num_digits)).ok()?;
    pattern.find(message).map(|m| m.as_str().to_string())
}

/// Whether a message carries the retriever prefix
pub fn is_retriever_message(message: &str) -> bool {
    message.trim_start().starts_with(RETRIEVER_PREFIX)
}

/// Whether a message is addressed to the app owning `hash`
///
/// The retriever format places the app-signature hash at the end of the
/// message, so this checks the final whitespace-separated token.
pub fn contains_hash(message: &str, hash: &SignatureHash) -> bool {
    message
        .split_whitespace()
        .last()
        .is_some_and(|token| token == hash.as_str())
}
