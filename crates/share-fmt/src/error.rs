use thiserror::Error;

use das_params::SHARE_SIZE;

use crate::hash::HASH_SIZE;

/// Errors for decoding and validating share format types.
#[derive(Debug, Error)]
pub enum ShareFmtError {
    /// A root hash had the wrong byte length.
    #[error("invalid hash size, expected {HASH_SIZE}, got {0}")]
    InvalidHashSize(usize),

    /// Input that should have been hexadecimal was malformed.
    #[error("invalid hex string: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// A share buffer had the wrong byte length.
    #[error("invalid share size, expected {SHARE_SIZE}, got {0}")]
    InvalidShareSize(usize),

    /// A share in a namespaced row does not carry the row's namespace.
    #[error("share {index} does not match the row namespace")]
    NamespaceMismatch {
        /// Index of the offending share within the row.
        index: usize,
    },

    /// The inclusion proof did not verify against the row root.
    #[error("inclusion proof failed verification against row root")]
    InvalidProof,
}

/// Wrapper result type.
pub type ShareFmtResult<T> = Result<T, ShareFmtError>;
