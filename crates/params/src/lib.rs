//! Protocol parameters for the erasure-coded data square.
//!
//! These are the constants the share format is defined against: the total
//! share width, the namespace prefix width, the default erasure-coding
//! codec, and the largest square dimension a given protocol version
//! supports. Consumers that need them as runtime configuration rather than
//! consts build a [`SquareParams`] for a concrete [`ProtocolVersion`].

use thiserror::Error;

/// Alias for protocol version numbers.
///
/// This exists in case we decide to widen it later.
pub type ProtocolVersion = u8;

/// The most recent protocol version these parameters are defined for.
pub const LATEST_VERSION: ProtocolVersion = 1;

/// System-wide size of a share in bytes, namespace prefix included.
pub const SHARE_SIZE: usize = 512;

/// Size of the namespace prefix of a share in bytes.
pub const NAMESPACE_SIZE: usize = 29;

/// Size of the data payload of a share in bytes.
pub const SHARE_DATA_SIZE: usize = SHARE_SIZE - NAMESPACE_SIZE;

/// Largest square dimension supported before erasure coding, as of
/// [`LATEST_VERSION`].
const SQUARE_SIZE_UPPER_BOUND: usize = 128;

/// Errors from resolving parameters for a protocol version.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    /// The requested version is newer than anything we know about.
    #[error("unsupported protocol version {0}")]
    UnsupportedVersion(ProtocolVersion),
}

/// Identifier for an erasure-coding codec used to extend the square.
///
/// This core never invokes the codec; it only names which one square
/// producers and consumers must agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodecId {
    /// Leopard-style Reed-Solomon, the codec every current version uses.
    #[default]
    LeopardReedSolomon,
}

impl CodecId {
    /// Returns the stable string identifier for this codec.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeopardReedSolomon => "Leopard",
        }
    }
}

/// Returns the maximum supported square dimension for unerasured data under
/// the given protocol version.
pub const fn square_size_upper_bound(version: ProtocolVersion) -> Result<usize, ParamsError> {
    if version > LATEST_VERSION {
        return Err(ParamsError::UnsupportedVersion(version));
    }
    Ok(SQUARE_SIZE_UPPER_BOUND)
}

/// Immutable parameter set for one protocol version.
///
/// Computed once at component initialization and passed into constructors,
/// so different versions can coexist in one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareParams {
    version: ProtocolVersion,
    share_size: usize,
    namespace_size: usize,
    default_codec: CodecId,
    square_size_upper_bound: usize,
}

impl SquareParams {
    /// Resolves the parameter set for a protocol version.
    pub const fn for_version(version: ProtocolVersion) -> Result<Self, ParamsError> {
        let square_size_upper_bound = match square_size_upper_bound(version) {
            Ok(b) => b,
            Err(e) => return Err(e),
        };

        Ok(Self {
            version,
            share_size: SHARE_SIZE,
            namespace_size: NAMESPACE_SIZE,
            default_codec: CodecId::LeopardReedSolomon,
            square_size_upper_bound,
        })
    }

    /// Resolves the parameter set for [`LATEST_VERSION`].
    pub const fn latest() -> Self {
        match Self::for_version(LATEST_VERSION) {
            Ok(p) => p,
            Err(_) => unreachable!(),
        }
    }

    /// Gets the protocol version this set was resolved for.
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Gets the total share size in bytes.
    pub const fn share_size(&self) -> usize {
        self.share_size
    }

    /// Gets the namespace prefix size in bytes.
    pub const fn namespace_size(&self) -> usize {
        self.namespace_size
    }

    /// Gets the share data payload size in bytes.
    pub const fn share_data_size(&self) -> usize {
        self.share_size - self.namespace_size
    }

    /// Gets the default erasure-coding codec.
    pub const fn default_codec(&self) -> CodecId {
        self.default_codec
    }

    /// Gets the maximum supported square dimension for unerasured data.
    pub const fn square_size_upper_bound(&self) -> usize {
        self.square_size_upper_bound
    }
}
