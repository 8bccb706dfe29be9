//! Signature hash retrieval over a registry
//!
//! The one caller-facing operation: look up a package's certificates and
//! hash each of them. Lookup failures are recovered here — callers always
//! get a (possibly empty) list, never an error.

use crate::hash::signature_hash;
use crate::registry::SignatureRegistry;
use crate::types::SignatureHash;

/// Computes app-signature hashes for packages known to a registry
pub struct AppSignatureHasher {
    registry: Box<dyn SignatureRegistry>,
}

impl AppSignatureHasher {
    pub fn new(registry: Box<dyn SignatureRegistry>) -> Self {
        Self { registry }
    }

    /// Signature hashes for a package, one per certificate, in registry order
    ///
    /// # Arguments
    /// * `package_name` - The application's package identifier
    ///
    /// # Returns
    /// One hash per certificate; empty when the package has no certificates
    /// or cannot be resolved (the failure is logged, not raised)
    pub fn signature_hashes(&self, package_name: &str) -> Vec<SignatureHash> {
        let certificates = match self.registry.signing_certificates(package_name) {
            Ok(certificates) => certificates,
            Err(e) => {
                tracing::error!("Unable to find package to obtain hash: {}", e);
                return Vec::new();
            }
        };

        certificates
            .iter()
            .map(|certificate| signature_hash(package_name, &certificate.chars_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;
    use crate::types::SigningCertificate;

    fn hasher_with(
        package: &str,
        certificates: Vec<SigningCertificate>,
    ) -> AppSignatureHasher {
        let registry = MemoryRegistry::new();
        registry.register(package, certificates).unwrap();
        AppSignatureHasher::new(Box::new(registry))
    }

    #[test]
    fn test_single_certificate() {
        let hasher = hasher_with(
            "com.asgar.otpverify",
            vec![SigningCertificate::from_der(vec![0xab, 0xcd, 0x12, 0x34])],
        );

        let hashes = hasher.signature_hashes("com.asgar.otpverify");
        assert_eq!(hashes.len(), 1);
        // signature_hash("com.asgar.otpverify", "abcd1234")
        assert_eq!(hashes[0].as_str(), "IEtqEPRE9/1");
    }

    #[test]
    fn test_two_certificates_keep_order() {
        let first = SigningCertificate::from_der(vec![0xab, 0xcd, 0x12, 0x34]);
        let second = SigningCertificate::from_der(vec![0x0f, 0x00, 0xba, 0x44]);
        let hasher = hasher_with("com.asgar.otpverify", vec![first, second]);

        let hashes = hasher.signature_hashes("com.asgar.otpverify");
        assert_eq!(hashes.len(), 2);
        assert_eq!(hashes[0].as_str(), "IEtqEPRE9/1");
        assert_eq!(hashes[1].as_str(), "e/8Ipr/XrtT");
    }

    #[test]
    fn test_no_certificates_yields_empty() {
        let hasher = hasher_with("com.example.unsigned", Vec::new());
        assert!(hasher.signature_hashes("com.example.unsigned").is_empty());
    }

    #[test]
    fn test_unknown_package_yields_empty() {
        let hasher = AppSignatureHasher::new(Box::new(MemoryRegistry::new()));
        assert!(hasher.signature_hashes("com.example.missing").is_empty());
    }

    #[test]
    fn test_hashes_are_stable_across_calls() {
        let hasher = hasher_with(
            "com.asgar.otpverify",
            vec![SigningCertificate::from_der(vec![0xab, 0xcd, 0x12, 0x34])],
        );

        assert_eq!(
            hasher.signature_hashes("com.asgar.otpverify"),
            hasher.signature_hashes("com.asgar.otpverify")
        );
    }
}
