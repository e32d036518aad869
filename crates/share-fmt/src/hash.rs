use std::fmt;
use std::str;

use crate::error::{ShareFmtError, ShareFmtResult};

/// Length of a root hash in bytes.
pub const HASH_SIZE: usize = 32;

/// A 32-byte root hash, the commitment to a square or row's contents.
///
/// The serialized form is uppercase hexadecimal with no prefix, exactly 64
/// characters; [`DataHash::from_hex`] is the exact inverse of that
/// rendering.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataHash([u8; HASH_SIZE]);

impl DataHash {
    /// Creates a new `DataHash` from a [`HASH_SIZE`]-byte array.
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a new `DataHash` from a slice, checking its length.
    pub fn from_slice(buf: &[u8]) -> ShareFmtResult<Self> {
        let bytes: [u8; HASH_SIZE] = buf
            .try_into()
            .map_err(|_| ShareFmtError::InvalidHashSize(buf.len()))?;
        Ok(Self(bytes))
    }

    /// Decodes a `DataHash` from a hexadecimal string.
    ///
    /// This is the path for hashes arriving from the network or storage:
    /// malformed hex and wrong decoded lengths come back as typed errors.
    pub fn from_hex(s: &str) -> ShareFmtResult<Self> {
        // hex::decode accepts the empty string; we do not.
        if s.is_empty() {
            return Err(hex::FromHexError::InvalidStringLength.into());
        }
        let raw = hex::decode(s)?;
        Self::from_slice(&raw)
    }

    /// Decodes a `DataHash` from a hexadecimal string, panicking on
    /// failure.
    ///
    /// Only for trusted literals fixed at compile or configuration time,
    /// e.g. a genesis hash baked into a config. Never call this on
    /// network-, storage-, or user-supplied input; use
    /// [`DataHash::from_hex`] there and propagate the error.
    pub fn must_from_hex(s: &str) -> Self {
        match Self::from_hex(s) {
            Ok(h) => h,
            Err(e) => panic!("datahash: invalid trusted literal {s:?}: {e}"),
        }
    }

    /// Renders the hash as uppercase hexadecimal, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Returns the hash as a byte slice.
    pub const fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Converts to the inner byte array.
    pub const fn into_inner(self) -> [u8; HASH_SIZE] {
        self.0
    }
}

impl From<[u8; HASH_SIZE]> for DataHash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<DataHash> for [u8; HASH_SIZE] {
    fn from(hash: DataHash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for DataHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for DataHash {
    type Error = ShareFmtError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(buf)
    }
}

impl fmt::Display for DataHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for DataHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataHash({})", self)
    }
}

impl str::FromStr for DataHash {
    type Err = ShareFmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_lengths() {
        for len in [0usize, 1, 31, 33, 64] {
            let buf = vec![0u8; len];
            match DataHash::from_slice(&buf) {
                Err(ShareFmtError::InvalidHashSize(got)) => assert_eq!(got, len),
                other => panic!("unexpected result for len {len}: {other:?}"),
            }
        }
        assert!(DataHash::from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn test_hex_roundtrip() {
        let mut bytes = [0u8; HASH_SIZE];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i * 7) as u8;
        }
        let hash = DataHash::new(bytes);

        let s = hash.to_hex();
        assert_eq!(s.len(), 64);
        assert_eq!(s, s.to_uppercase());

        let back = DataHash::from_hex(&s).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_from_hex_lowercase() {
        // Parsing is case-insensitive; rendering is always uppercase.
        let s = "ff".repeat(32);
        let hash = DataHash::from_hex(&s).unwrap();
        assert_eq!(hash.to_hex(), s.to_uppercase());
    }

    #[test]
    fn test_from_hex_malformed() {
        assert!(matches!(
            DataHash::from_hex(""),
            Err(ShareFmtError::HexDecode(_))
        ));
        assert!(matches!(
            DataHash::from_hex("zz"),
            Err(ShareFmtError::HexDecode(_))
        ));
    }

    #[test]
    fn test_from_hex_short() {
        // 62 hex digits decode cleanly but to only 31 bytes.
        let s = "ab".repeat(31);
        assert!(matches!(
            DataHash::from_hex(&s),
            Err(ShareFmtError::InvalidHashSize(31))
        ));
    }

    #[test]
    fn test_from_str() {
        let s = "00".repeat(32);
        let hash: DataHash = s.parse().unwrap();
        assert_eq!(hash, DataHash::new([0u8; HASH_SIZE]));
    }

    #[test]
    fn test_must_from_hex() {
        let hash = DataHash::must_from_hex(&"12".repeat(32));
        assert_eq!(hash.as_bytes(), &[0x12; HASH_SIZE]);
    }

    #[test]
    #[should_panic(expected = "invalid trusted literal")]
    fn test_must_from_hex_panics() {
        DataHash::must_from_hex("not hex");
    }
}
