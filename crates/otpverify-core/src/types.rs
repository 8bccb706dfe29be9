//! Certificate and hash value types
//!
//! `SigningCertificate` wraps the opaque certificate blob reported by the
//! platform package registry; `SignatureHash` is the 11-character result
//! consumed by SMS retriever flows.

use std::fmt;

use crate::error::{Error, Result};
use crate::hash::NUM_BASE64_CHARS;

/// One signing certificate attached to an application.
///
/// The platform reports certificates as opaque DER blobs. Hashing operates
/// on the certificate's canonical textual form, its lowercase hex "chars
/// string" (the form Android's `Signature.toCharsString()` produces).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningCertificate {
    der: Vec<u8>,
}

impl SigningCertificate {
    /// Wrap a raw DER certificate blob
    pub fn from_der(der: impl Into<Vec<u8>>) -> Self {
        Self { der: der.into() }
    }

    /// Parse a certificate from its hex chars string
    ///
    /// # Arguments
    /// * `chars` - Hex representation of the DER blob (either case)
    ///
    /// # Returns
    /// The certificate, or `Error::InvalidCertificate` for malformed hex
    pub fn from_chars_string(chars: &str) -> Result<Self> {
        Ok(Self {
            der: hex::decode(chars)?,
        })
    }

    /// Canonical textual form: lowercase hex of the DER blob
    pub fn chars_string(&self) -> String {
        hex::encode(&self.der)
    }

    /// Raw DER bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// An 11-character app-signature hash.
///
/// Always exactly 11 characters from the standard base64 alphabet, never
/// padding or whitespace. Values are produced by [`crate::hash::signature_hash`]
/// or parsed from known-good strings with [`SignatureHash::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureHash(String);

impl SignatureHash {
    /// Internal constructor; `hash::signature_hash` guarantees the invariant.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Parse a hash received out of band (e.g. from host configuration)
    ///
    /// # Returns
    /// The hash, or `Error::InvalidHash` when the value is not 11
    /// characters of the standard base64 alphabet
    pub fn parse(value: &str) -> Result<Self> {
        let valid_alphabet = value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/');
        if value.len() != NUM_BASE64_CHARS || !valid_alphabet {
            return Err(Error::InvalidHash(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SignatureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SignatureHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_string_roundtrip() {
        let cert = SigningCertificate::from_der(vec![0xab, 0xcd, 0x12, 0x34]);
        assert_eq!(cert.chars_string(), "abcd1234");

        let restored = SigningCertificate::from_chars_string("abcd1234").unwrap();
        assert_eq!(cert, restored);
        assert_eq!(restored.as_der(), &[0xab, 0xcd, 0x12, 0x34]);
    }

    #[test]
    fn test_chars_string_accepts_uppercase() {
        let restored = SigningCertificate::from_chars_string("ABCD1234").unwrap();
        assert_eq!(restored.as_der(), &[0xab, 0xcd, 0x12, 0x34]);

        // Canonical form is always lowercase
        assert_eq!(restored.chars_string(), "abcd1234");
    }

    #[test]
    fn test_invalid_chars_string() {
        assert!(SigningCertificate::from_chars_string("not hex!").is_err());
        assert!(SigningCertificate::from_chars_string("abc").is_err()); // odd length
    }

    #[test]
    fn test_parse_hash() {
        let hash = SignatureHash::parse("L1lD8GP/5Eo").unwrap();
        assert_eq!(hash.as_str(), "L1lD8GP/5Eo");
        assert_eq!(hash.to_string(), "L1lD8GP/5Eo");
    }

    #[test]
    fn test_parse_hash_rejects_bad_values() {
        // Wrong length
        assert!(SignatureHash::parse("short").is_err());
        assert!(SignatureHash::parse("twelve chars").is_err());

        // Padding and whitespace are never part of a hash
        assert!(SignatureHash::parse("L1lD8GP/5E=").is_err());
        assert!(SignatureHash::parse("L1lD8GP 5Eo").is_err());
    }
}
