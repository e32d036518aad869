use borsh::{BorshDeserialize, BorshSerialize};

use das_params::{NAMESPACE_SIZE, SHARE_SIZE};

use crate::hash::{DataHash, HASH_SIZE};
use crate::share::{Namespace, Share};

impl BorshSerialize for DataHash {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.as_bytes())
    }
}

impl BorshDeserialize for DataHash {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let bytes = <[u8; HASH_SIZE]>::deserialize_reader(reader)?;
        Ok(DataHash::new(bytes))
    }
}

impl BorshSerialize for Namespace {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.as_bytes())
    }
}

impl BorshDeserialize for Namespace {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let bytes = <[u8; NAMESPACE_SIZE]>::deserialize_reader(reader)?;
        Ok(Namespace::new(bytes))
    }
}

impl BorshSerialize for Share {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.as_bytes())
    }
}

impl BorshDeserialize for Share {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let bytes = <[u8; SHARE_SIZE]>::deserialize_reader(reader)?;
        Ok(Share::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borsh_hash_roundtrip() {
        let hash = DataHash::new([0x7E; HASH_SIZE]);
        let encoded = borsh::to_vec(&hash).unwrap();
        assert_eq!(encoded, vec![0x7E; HASH_SIZE]);
        let back: DataHash = borsh::from_slice(&encoded).unwrap();
        assert_eq!(hash, back);
    }

    #[test]
    fn test_borsh_share_roundtrip() {
        let mut buf = [0x02u8; SHARE_SIZE];
        buf[..NAMESPACE_SIZE].fill(0x01);
        let share = Share::new(buf);

        let encoded = borsh::to_vec(&share).unwrap();
        assert_eq!(encoded.len(), SHARE_SIZE);
        let back: Share = borsh::from_slice(&encoded).unwrap();
        assert_eq!(share, back);
    }

    #[test]
    fn test_borsh_namespace_roundtrip() {
        let ns = Namespace::new([0x09; NAMESPACE_SIZE]);
        let encoded = borsh::to_vec(&ns).unwrap();
        let back: Namespace = borsh::from_slice(&encoded).unwrap();
        assert_eq!(ns, back);
    }

    #[test]
    fn test_borsh_share_truncated() {
        let result: Result<Share, _> = borsh::from_slice(&[0u8; SHARE_SIZE - 1]);
        assert!(result.is_err());
    }
}
