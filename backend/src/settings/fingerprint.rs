//! Secret fingerprinting for operational visibility.
//!
//! A truncated SHA-256 digest lets operators tell which key is active
//! without exposing the key material. Fingerprints are logged on startup.

use sha2::{Digest, Sha256};

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Truncated SHA-256 fingerprint of `secret`, as 16 hex characters.
///
/// # Examples
///
/// ```rust
/// use order_functions::settings::secret_fingerprint;
///
/// let fp = secret_fingerprint("re_123");
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn secret_fingerprint(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}
