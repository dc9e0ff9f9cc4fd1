use std::fmt;

/// Symmetric key material for token signing and verification.
///
/// Loaded once from configuration at startup; [`JwtCodec`](super::JwtCodec)
/// derives its keys from this value at construction and nothing replaces it
/// while the process runs.
#[derive(Clone)]
pub struct SigningSecret {
    bytes: Vec<u8>,
}

impl SigningSecret {
    /// Build a secret from the configured value.
    ///
    /// Surrounding whitespace is stripped. Returns `None` when nothing is
    /// left; the caller must refuse to start in that case.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            bytes: trimmed.as_bytes().to_vec(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("SigningSecret").finish_non_exhaustive()
    }
}
