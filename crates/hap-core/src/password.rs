//! Deterministic password derivation.
//!
//! A password is `base64(HMAC-SHA1(key = secret, message = domain ++ salt))`
//! truncated to the requested length.
//!
//! # Compatibility
//!
//! SHA-1 is weak by current standards. It stays because every password
//! this tool has ever produced depends on it: switching the hash, the
//! encoding, or the way domain and salt are joined would silently change
//! every derived password for existing users.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::digest::Key;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Password length used when the caller does not ask for one.
pub const DEFAULT_LENGTH: usize = 14;

/// Length of a padded base64 encoding of a 20-byte SHA-1 digest.
pub const MAX_LENGTH: usize = 28;

/// Derive the password for `domain` from `salt` and the master `secret`.
///
/// Identical inputs always yield the identical string. `length` larger than
/// [`MAX_LENGTH`] is clamped rather than rejected.
pub fn derive_password(domain: &str, salt: &str, secret: &str, length: usize) -> String {
    let mut mac = HmacSha1::new(&block_key(secret.as_bytes()));
    mac.update(domain.as_bytes());
    mac.update(salt.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut encoded = STANDARD.encode(digest);
    // base64 output is ASCII, so any byte index is a char boundary.
    encoded.truncate(length.min(encoded.len()));
    encoded
}

/// Expand `secret` into a full HMAC key block.
///
/// Keys longer than the block are hashed first and shorter ones are
/// zero-padded, exactly as HMAC itself prepares them, so the MAC equals the
/// one keyed with the raw secret.
fn block_key(secret: &[u8]) -> Key<HmacSha1> {
    let mut key = Key::<HmacSha1>::default();
    if secret.len() > key.len() {
        let digest = <Sha1 as sha1::Digest>::digest(secret);
        key[..digest.len()].copy_from_slice(&digest);
    } else {
        key[..secret.len()].copy_from_slice(secret);
    }
    key
}
