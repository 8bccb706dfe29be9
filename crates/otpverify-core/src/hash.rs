//! App-signature hash computation
//!
//! Implements the truncated-digest format required by SMS auto-retrieval
//! APIs: SHA-256 over `"{package} {certificate}"`, truncated to 9 bytes and
//! base64-encoded without padding, keeping the first 11 characters.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use sha2::{Digest, Sha256};

use crate::types::SignatureHash;

/// Number of digest bytes kept before encoding
pub const NUM_HASHED_BYTES: usize = 9;

/// Number of base64 characters in the final hash
pub const NUM_BASE64_CHARS: usize = 11;

/// Compute the app-signature hash for one certificate
///
/// # Arguments
/// * `package_name` - The application's package identifier
/// * `signature_chars` - The certificate's textual (hex chars string) form
///
/// # Returns
/// The 11-character signature hash
///
/// # Example
/// ```
/// use otpverify_core::hash::signature_hash;
///
/// let hash = signature_hash("com.example.app", "ABCD1234");
/// assert_eq!(hash.as_str(), "V1X75mBB74i");
/// ```
pub fn signature_hash(package_name: &str, signature_chars: &str) -> SignatureHash {
    let app_info = format!("{} {}", package_name, signature_chars);
    let digest = sha256(app_info.as_bytes());

    // 9 bytes encode to exactly 12 base64 characters, no padding involved
    let mut encoded = STANDARD_NO_PAD.encode(&digest[..NUM_HASHED_BYTES]);
    encoded.truncate(NUM_BASE64_CHARS);

    SignatureHash::new_unchecked(encoded)
}

/// Compute SHA-256 hash of data
///
/// # Arguments
/// * `data` - Data to hash
///
/// # Returns
/// 32-byte hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
