//! OtpVerify Core Library
//!
//! This library computes the app-signature hashes required by SMS
//! auto-retrieval APIs: an 11-character digest binding an incoming text
//! message to a specific application and signing key, plus the message
//! utilities needed to consume such messages.

pub mod error;
pub mod hash;
pub mod hasher;
pub mod otp;
pub mod registry;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use hash::{signature_hash, sha256, NUM_BASE64_CHARS, NUM_HASHED_BYTES};
pub use hasher::AppSignatureHasher;
pub use otp::{contains_hash, extract_otp, is_retriever_message, RETRIEVER_PREFIX};
pub use registry::{MemoryRegistry, SignatureRegistry};
pub use types::{SignatureHash, SigningCertificate};
