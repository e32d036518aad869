//! Hasher factory for share commitments.

use digest::Digest;
use sha2::Sha256;

/// The incremental hash accumulator used for share commitments.
pub type ShareHasher = Sha256;

/// Returns a fresh, independent SHA-256 accumulator.
///
/// Every call yields its own accumulator with no shared state, so any
/// number of callers can hash concurrently. The returned value itself is
/// single-owner; it is not meant to be shared across writers.
pub fn new_hasher() -> ShareHasher {
    Sha256::new()
}
