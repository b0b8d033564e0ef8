//! The `{nodeID, start, end, weight}` tuple shared by every staking tx.
use crate::{errors::Result, ids::node, packer::Packer};
use serde::{Deserialize, Serialize};

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/platformvm/txs#Validator>
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Default)]
pub struct Validator {
    #[serde(rename = "nodeID")]
    pub node_id: node::Id,
    pub start: u64,
    pub end: u64,
    pub weight: u64,
}

impl Validator {
    pub fn new(node_id: node::Id, start: u64, end: u64, weight: u64) -> Self {
        Self {
            node_id,
            start,
            end,
            weight,
        }
    }

    pub fn duration(&self) -> Result<u64> {
        self.end
            .checked_sub(self.start)
            .ok_or_else(|| crate::errors::Error::syntactic("validator end before start"))
    }

    pub fn contains(&self, other: &Validator) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn covers(&self, t: u64) -> bool {
        self.start <= t && t < self.end
    }

    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        packer.pack_bytes(self.node_id.as_ref())?;
        packer.pack_u64(self.start)?;
        packer.pack_u64(self.end)?;
        packer.pack_u64(self.weight)?;
        Ok(())
    }

    pub fn unpack_from(packer: &Packer) -> Result<Self> {
        let node_id = node::Id::from_slice(&packer.unpack_bytes(node::LEN)?);
        let start = packer.unpack_u64()?;
        let end = packer.unpack_u64()?;
        let weight = packer.unpack_u64()?;
        Ok(Self {
            node_id,
            start,
            end,
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_and_covers() {
        let v = Validator::new(node::Id::empty(), 100, 200, 1);
        let d = Validator::new(node::Id::empty(), 110, 190, 1);
        assert!(v.contains(&d));
        assert!(!d.contains(&v));
        assert!(v.covers(100));
        assert!(!v.covers(200));
    }
}
