use std::fmt;

use das_params::{NAMESPACE_SIZE, SHARE_DATA_SIZE, SHARE_SIZE};

use crate::error::{ShareFmtError, ShareFmtResult};

/// Opaque namespace identifier ([`NAMESPACE_SIZE`]-byte prefix of a share).
///
/// Namespaces partition shares by application ownership within a square.
/// This core only extracts and compares them; it never interprets the
/// bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Namespace([u8; NAMESPACE_SIZE]);

impl Namespace {
    /// Creates a new `Namespace` from a [`NAMESPACE_SIZE`]-byte array.
    pub const fn new(bytes: [u8; NAMESPACE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the namespace as a byte slice.
    pub const fn as_bytes(&self) -> &[u8; NAMESPACE_SIZE] {
        &self.0
    }

    /// Converts to the inner byte array.
    pub const fn into_inner(self) -> [u8; NAMESPACE_SIZE] {
        self.0
    }
}

impl From<[u8; NAMESPACE_SIZE]> for Namespace {
    fn from(bytes: [u8; NAMESPACE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Namespace {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self)
    }
}

/// A single share of an erasure-coded data square.
///
/// Exactly [`SHARE_SIZE`] bytes: a [`NAMESPACE_SIZE`]-byte namespace prefix
/// followed by the data payload. The length invariant is enforced at
/// construction, so [`Share::namespace`] and [`Share::data`] are total.
/// Shares are immutable once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Share([u8; SHARE_SIZE]);

impl Share {
    /// Creates a new `Share` from a [`SHARE_SIZE`]-byte array.
    pub const fn new(bytes: [u8; SHARE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a new `Share` from a slice, checking its length.
    ///
    /// This is the boundary for bytes arriving from the wire or disk;
    /// anything that is not exactly [`SHARE_SIZE`] bytes is rejected.
    pub fn from_slice(buf: &[u8]) -> ShareFmtResult<Self> {
        let bytes: [u8; SHARE_SIZE] = buf
            .try_into()
            .map_err(|_| ShareFmtError::InvalidShareSize(buf.len()))?;
        Ok(Self(bytes))
    }

    /// Returns the namespace prefix of the share.
    pub fn namespace(&self) -> Namespace {
        let mut ns = [0u8; NAMESPACE_SIZE];
        ns.copy_from_slice(&self.0[..NAMESPACE_SIZE]);
        Namespace(ns)
    }

    /// Returns the data payload of the share, everything after the
    /// namespace prefix, as a borrowed view.
    pub fn data(&self) -> &[u8] {
        &self.0[NAMESPACE_SIZE..]
    }

    /// Returns the full share as a byte slice.
    pub const fn as_bytes(&self) -> &[u8; SHARE_SIZE] {
        &self.0
    }

    /// Converts to the inner byte array.
    pub const fn into_inner(self) -> [u8; SHARE_SIZE] {
        self.0
    }
}

impl From<[u8; SHARE_SIZE]> for Share {
    fn from(bytes: [u8; SHARE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Share {
    type Error = ShareFmtError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(buf)
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The payload is too large to be worth printing.
        write!(f, "Share(ns {}, {} data bytes)", self.namespace(), SHARE_DATA_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_share(ns_byte: u8, data_byte: u8) -> Share {
        let mut buf = [data_byte; SHARE_SIZE];
        buf[..NAMESPACE_SIZE].fill(ns_byte);
        Share::new(buf)
    }

    #[test]
    fn test_split_lengths() {
        let share = make_share(0xAA, 0xBB);
        assert_eq!(share.namespace().as_bytes().len(), NAMESPACE_SIZE);
        assert_eq!(share.data().len(), SHARE_SIZE - NAMESPACE_SIZE);
    }

    #[test]
    fn test_split_join() {
        let mut buf = [0u8; SHARE_SIZE];
        for (i, b) in buf.iter_mut().enumerate() {
            *b = i as u8;
        }
        let share = Share::new(buf);

        let mut joined = Vec::with_capacity(SHARE_SIZE);
        joined.extend_from_slice(share.namespace().as_bytes());
        joined.extend_from_slice(share.data());
        assert_eq!(joined.as_slice(), share.as_bytes());
    }

    #[test]
    fn test_split_contents() {
        // 29 namespace bytes of 0x01 followed by 483 data bytes of 0x02.
        let share = make_share(0x01, 0x02);
        assert_eq!(share.namespace().as_bytes(), &[0x01; NAMESPACE_SIZE]);
        assert_eq!(share.data(), &[0x02; 483][..]);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        for len in [0usize, 1, SHARE_SIZE - 1, SHARE_SIZE + 1] {
            let buf = vec![0u8; len];
            match Share::from_slice(&buf) {
                Err(ShareFmtError::InvalidShareSize(got)) => assert_eq!(got, len),
                other => panic!("unexpected result for len {len}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_slice_exact_length() {
        let buf = vec![0x42u8; SHARE_SIZE];
        let share = Share::from_slice(&buf).unwrap();
        assert_eq!(share.as_bytes().as_slice(), buf.as_slice());
    }
}
