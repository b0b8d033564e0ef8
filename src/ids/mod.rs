//! The 32-byte content-addressed ID type: transaction IDs, block IDs,
//! subnet IDs, and chain IDs all share this representation.
//!
//! ```
//! use platformvm_staking::ids;
//!
//! assert_eq!(format!("{}", ids::Id::default()), "11111111111111111111111111111111LpoYY");
//! ```
pub mod node;
pub mod short;

use std::{cmp::Ordering, collections::HashSet, fmt, hash::{Hash, Hasher}, str::FromStr};

use crate::{
    errors::{Error, Result},
    formatting, hash, packer,
};
use serde::{self, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

pub const LEN: usize = 32;

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/ids#ID>
#[derive(Debug, Clone, Copy, Eq, AsBytes, FromZeroes, FromBytes, Unaligned)]
#[repr(transparent)]
pub struct Id([u8; LEN]);

impl Default for Id {
    fn default() -> Self {
        Self::empty()
    }
}

impl Id {
    pub fn empty() -> Self {
        Id([0; LEN])
    }

    pub fn is_empty(&self) -> bool {
        (*self) == Self::empty()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/ids#ToID>
    pub fn sha256(d: impl AsRef<[u8]>) -> Self {
        Id::from_slice(&hash::sha256(d))
    }

    /// If the passed array is shorter than LEN, pads with zero.
    pub fn from_slice(d: &[u8]) -> Self {
        assert!(d.len() <= LEN);
        let mut d: Vec<u8> = Vec::from(d);
        if d.len() < LEN {
            d.resize(LEN, 0);
        }
        let d: [u8; LEN] = d.try_into().unwrap();
        Id(d)
    }

    /// Derives an ID that is a function of this ID and a prefix, used for
    /// the UTXO-ID-style `sha256(prefixes || txID)` derivation.
    /// ref. "ids.ID.Prefix(output_index)"
    pub fn prefix(&self, prefixes: &[u64]) -> Result<Self> {
        let n = prefixes.len() * packer::U64_LEN + LEN;
        let packer = packer::Packer::new(n, n);
        for pfx in prefixes {
            packer.pack_u64(*pfx)?;
        }
        packer.pack_bytes(&self.0)?;

        let b = packer.take_bytes();
        let d = hash::sha256(&b);
        Ok(Self::from_slice(&d))
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", formatting::encode_cb58_with_checksum_string(&self.0))
    }
}

impl FromStr for Id {
    type Err = std::io::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decoded = formatting::decode_cb58_with_checksum(s.trim()).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("failed decode_cb58_with_checksum '{}'", e),
            )
        })?;
        Ok(Self::from_slice(&decoded))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Id, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = Id;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a base-58 encoded ID-string with checksum")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Id::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Id) -> Ordering {
        self.0.cmp(&(other.0))
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Id) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Id {
    fn eq(&self, other: &Id) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Hash for Id {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

pub type Set = HashSet<Id>;

pub fn new_set(size: usize) -> Set {
    HashSet::with_capacity(size)
}

/// Generates a chain/VM ID deterministically from a human-readable name
/// (used for genesis-declared chain IDs rather than tx-derived ones).
pub fn encode_vm_name_to_id(name: &str) -> Result<Id> {
    let n = name.len();
    if n > LEN {
        return Err(Error::syntactic(format!("can't id {} bytes (>{})", n, LEN)));
    }
    Ok(Id::from_slice(name.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = Id::from_slice(&[
            0x3d, 0x0a, 0xd1, 0x2b, 0x8e, 0xe8, 0x92, 0x8e, 0xdf, 0x24, 0x8c, 0xa9, 0x1c, 0xa5,
            0x56, 0x00, 0xfb, 0x38, 0x3f, 0x07, 0xc3, 0x2b, 0xff, 0x1d, 0x6d, 0xec, 0x47, 0x2b,
            0x25, 0xcf, 0x59, 0xa7,
        ]);
        assert_eq!(
            id.to_string(),
            "TtF4d2QWbk5vzQGTEPrN48x6vwgAoAmKQ9cbp79inpQmcRKES"
        );
        let parsed = Id::from_str("TtF4d2QWbk5vzQGTEPrN48x6vwgAoAmKQ9cbp79inpQmcRKES").unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_default() {
        assert_eq!(
            Id::default().to_string(),
            "11111111111111111111111111111111LpoYY"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        #[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
        struct Data {
            id: Id,
            ids: Vec<Id>,
        }
        let id = Id::sha256("hello");
        let d = Data {
            id,
            ids: vec![id, id],
        };
        let encoded = serde_json::to_string(&d).unwrap();
        let decoded: Data = serde_json::from_str(&encoded).unwrap();
        assert_eq!(d, decoded);
    }

    #[test]
    fn test_sort() {
        let mut ids = vec![
            Id::from_slice(&[0x03]),
            Id::from_slice(&[0x02]),
            Id::from_slice(&[0x01]),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                Id::from_slice(&[0x01]),
                Id::from_slice(&[0x02]),
                Id::from_slice(&[0x03]),
            ]
        );
    }

    #[test]
    fn test_vm_id() {
        let subnet_evm_id = encode_vm_name_to_id("subnetevm").unwrap();
        assert_eq!(
            format!("{}", subnet_evm_id),
            "srEXiWaHuhNyGwPUi444Tu47ZEDwxTWrbQiuD7FmgSAQ6X7Dy"
        );
    }
}
