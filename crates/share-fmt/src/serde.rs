//! Serde impls for the share format value types.
//!
//! Human-readable formats carry hex strings (uppercase for hashes, the
//! wire rendering; lowercase for shares); binary formats carry the raw
//! bytes.

use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Serialize};

use das_params::SHARE_SIZE;

use crate::hash::{DataHash, HASH_SIZE};
use crate::share::Share;

impl Serialize for DataHash {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&self.to_hex())
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for DataHash {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = DataHash;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a {}-character hex string", HASH_SIZE * 2)
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<DataHash, E> {
                    DataHash::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            struct BytesVisitor;

            impl<'de> de::Visitor<'de> for BytesVisitor {
                type Value = DataHash;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{HASH_SIZE} bytes")
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<DataHash, E> {
                    let bytes: [u8; HASH_SIZE] = v
                        .try_into()
                        .map_err(|_| E::invalid_length(v.len(), &self))?;
                    Ok(DataHash::new(bytes))
                }
            }

            d.deserialize_bytes(BytesVisitor)
        }
    }
}

impl Serialize for Share {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&hex::encode(self.as_bytes()))
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Share {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = Share;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a {}-character hex string", SHARE_SIZE * 2)
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Share, E> {
                    let raw = hex::decode(v).map_err(E::custom)?;
                    Share::from_slice(&raw).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            struct BytesVisitor;

            impl<'de> de::Visitor<'de> for BytesVisitor {
                type Value = Share;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{SHARE_SIZE} bytes")
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Share, E> {
                    Share::from_slice(v).map_err(|_| E::invalid_length(v.len(), &self))
                }
            }

            d.deserialize_bytes(BytesVisitor)
        }
    }
}
