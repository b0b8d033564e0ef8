//! The 20-byte short ID used for addresses (derived from a public key) and
//! as the underlying representation for node IDs.
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{
    errors::Error,
    formatting, hash,
    key::secp256k1::address,
};
use serde::{self, Deserialize, Deserializer, Serialize, Serializer};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

pub const LEN: usize = 20;

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/ids#ShortID>
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

    pub fn from_slice(d: &[u8]) -> Self {
        assert!(d.len() <= LEN);
        let mut d: Vec<u8> = Vec::from(d);
        if d.len() < LEN {
            d.resize(LEN, 0);
        }
        let d: [u8; LEN] = d.try_into().unwrap();
        Id(d)
    }

    /// Derives a short ID (address) from a raw public-key byte string.
    /// ref. "hashing.PubkeyBytesToAddress"
    pub fn from_public_key_bytes<S>(pub_key_bytes: S) -> std::io::Result<Self>
    where
        S: AsRef<[u8]>,
    {
        let hashed = hash::sha256_ripemd160(pub_key_bytes)?;
        Ok(Self::from_slice(&hashed))
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

/// Accepts both the bare CB58 form and the "<chain-alias>-<bech32>" address
/// form (e.g. "P-avax1...").
impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Id, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 1 {
            return Id::from_str(&s).map_err(serde::de::Error::custom);
        }
        let (_, short_bytes) = address::avax_address_to_short_bytes("", parts[1])
            .map_err(serde::de::Error::custom)?;
        Ok(Id::from_slice(&short_bytes))
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

/// Exists alongside `Vec<Id>` because its `Ord` compares length before
/// element-wise, mirroring how the packed wire encoding sorts.
#[derive(Debug, Eq, Clone)]
pub struct Ids(Vec<Id>);

impl Ids {
    pub fn new(ids: &[Id]) -> Self {
        Ids(Vec::from(ids))
    }
}

impl From<Vec<Id>> for Ids {
    fn from(ids: Vec<Id>) -> Self {
        Self::new(&ids)
    }
}

impl Ord for Ids {
    fn cmp(&self, other: &Ids) -> Ordering {
        let l1 = self.0.len();
        let l2 = other.0.len();
        l1.cmp(&l2).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Ids {
    fn partial_cmp(&self, other: &Ids) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ids {
    fn eq(&self, other: &Ids) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

pub fn encode_vm_name_to_id(name: &str) -> crate::errors::Result<Id> {
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
            0x56, 0x00, 0xfb, 0x38, 0x3f, 0x07,
        ]);
        assert_eq!(id.to_string(), "6ZmBHXTqjknJoZtXbnJ6x7af863rXDTwx");
        let parsed = Id::from_str("6ZmBHXTqjknJoZtXbnJ6x7af863rXDTwx").unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_sort_by_length_then_lexicographic() {
        let ids1 = Ids(vec![
            Id::from_slice(&[0x05]),
            Id::from_slice(&[0x06]),
            Id::from_slice(&[0x07]),
        ]);
        let ids2 = Ids(vec![
            Id::from_slice(&[0x01]),
            Id::from_slice(&[0x02]),
            Id::from_slice(&[0x03]),
            Id::from_slice(&[0x04]),
        ]);
        assert!(ids1 < ids2);
    }
}
