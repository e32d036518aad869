//! Canonical wire format of a *share*, the atomic unit of an erasure-coded
//! data square, and the value types used to address, hash, and prove
//! membership of shares within a namespace.
//!
//! Sampling, networking, and storage components fetch and verify shares;
//! this crate only defines the shapes and invariants they exchange. The
//! namespaced Merkle tree itself stays behind the [`InclusionVerifier`]
//! seam.

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(feature = "borsh")]
mod borsh;
mod error;
mod hash;
mod hasher;
mod row;
#[cfg(feature = "serde")]
mod serde;
mod share;

pub use error::{ShareFmtError, ShareFmtResult};
pub use hash::{DataHash, HASH_SIZE};
pub use hasher::{ShareHasher, new_hasher};
pub use row::{InclusionVerifier, NamespacedRow, NamespacedShares};
pub use share::{Namespace, Share};

// The share format is defined against these protocol parameters.
pub use das_params::{NAMESPACE_SIZE, SHARE_DATA_SIZE, SHARE_SIZE};

#[cfg(all(test, not(feature = "serde")))]
use bincode as _;
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;
