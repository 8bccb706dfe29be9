//! Package signature registry abstraction
//!
//! The platform's package manager is the only external dependency of the
//! hashing operation, so it sits behind a narrow trait. Hosts bridge their
//! real signature lookup into [`SignatureRegistry`]; tests and out-of-band
//! callers use [`MemoryRegistry`].

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::error::{Error, Result};
use crate::types::SigningCertificate;

/// Trait for package-signature lookups (synchronous)
pub trait SignatureRegistry: Send + Sync {
    /// Signing certificates attached to a package, in platform order
    ///
    /// # Returns
    /// The certificate list (possibly empty), or
    /// `Error::PackageNotFound` when the package cannot be resolved
    fn signing_certificates(&self, package_name: &str) -> Result<Vec<SigningCertificate>>;
}

/// Type alias for the package-to-certificates map
type CertificateMap = Arc<RwLock<HashMap<String, Vec<SigningCertificate>>>>;

/// In-memory signature registry implementation
pub struct MemoryRegistry {
    packages: CertificateMap,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            packages: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a package with its certificate list, replacing any previous
    /// entry for the same package
    pub fn register(
        &self,
        package_name: impl Into<String>,
        certificates: Vec<SigningCertificate>,
    ) -> Result<()> {
        let mut packages = self
            .packages
            .write()
            .map_err(|_| Error::Other("Failed to acquire write lock".to_string()))?;

        packages.insert(package_name.into(), certificates);
        Ok(())
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureRegistry for MemoryRegistry {
    fn signing_certificates(&self, package_name: &str) -> Result<Vec<SigningCertificate>> {
        let packages = self
            .packages
            .read()
            .map_err(|_| Error::Other("Failed to acquire read lock".to_string()))?;

        packages
            .get(package_name)
            .cloned()
            .ok_or_else(|| Error::PackageNotFound(package_name.to_string()))
    }
}
