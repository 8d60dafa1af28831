//! Digest-to-identifier formatting.
//!
//! Reduces an arbitrary byte string to a 128-bit MD5 digest and formats
//! it as a UUID with the version nibble forced to 4 and the variant bits
//! forced to the RFC 4122 pattern. MD5 provides the 128-bit width the
//! identifier format requires; it is not used for security.

use crate::identifier::DeviceIdentifier;
use md5::{Digest, Md5};
use uuid::Builder;

/// Hashes arbitrary bytes into a device identifier.
///
/// Deterministic: the same input always yields the same identifier.
#[must_use]
pub fn identifier_from_bytes(input: &[u8]) -> DeviceIdentifier {
    let mut hasher = Md5::new();
    hasher.update(input);
    let digest: [u8; 16] = hasher.finalize().into();

    // Builder::from_random_bytes applies the version-4 nibble and the
    // RFC 4122 variant bits to bytes 6 and 8; everything else is the
    // digest verbatim.
    DeviceIdentifier::from_uuid(Builder::from_random_bytes(digest).into_uuid())
}
