//! Addressable unspent transaction outputs.
use std::cmp::Ordering;

use crate::{
    errors::Result,
    ids::{self, short},
    key::secp256k1::txs::OutputOwners,
    packer::Packer,
};
use serde::{Deserialize, Serialize};

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/components/avax#UTXOID>
#[derive(Debug, Serialize, Deserialize, Eq, Clone, Copy, Default)]
pub struct Id {
    #[serde(rename = "txID")]
    pub tx_id: ids::Id,
    #[serde(rename = "outputIndex")]
    pub output_index: u32,
}

impl Id {
    pub fn new(tx_id: ids::Id, output_index: u32) -> Self {
        Self {
            tx_id,
            output_index,
        }
    }

    /// Flattens `(txID, outputIndex)` into the 32-byte key used to address
    /// the UTXO in the persistent store and in diffs.
    pub fn symbol(&self) -> Result<ids::Id> {
        self.tx_id.prefix(&[self.output_index as u64])
    }

    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        packer.pack_bytes(self.tx_id.as_ref())?;
        packer.pack_u32(self.output_index)?;
        Ok(())
    }

    pub fn unpack_from(packer: &Packer) -> Result<Self> {
        let tx_id = ids::Id::from_slice(&packer.unpack_bytes(ids::LEN)?);
        let output_index = packer.unpack_u32()?;
        Ok(Self {
            tx_id,
            output_index,
        })
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Id) -> Ordering {
        self.tx_id
            .cmp(&other.tx_id)
            .then_with(|| self.output_index.cmp(&other.output_index))
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

/// A single unspent output, addressable by `(txID, outputIndex)`. Created by
/// tx outputs, consumed (and never mutated) by tx inputs.
/// ref. §3 "UTXO"
#[derive(Debug, Serialize, Deserialize, Eq, Clone)]
pub struct Utxo {
    #[serde(rename = "utxoID")]
    pub utxo_id: Id,
    #[serde(rename = "assetID")]
    pub asset_id: ids::Id,
    pub owner: OutputOwners,
    pub amount: u64,
}

impl Utxo {
    pub fn new(utxo_id: Id, asset_id: ids::Id, owner: OutputOwners, amount: u64) -> Self {
        Self {
            utxo_id,
            asset_id,
            owner,
            amount,
        }
    }

    /// True once `locktime` (if any) has passed, i.e. spendable at time `t`.
    pub fn unlocked_at(&self, t: u64) -> bool {
        self.owner.locktime <= t
    }

    /// Addresses authorized to spend this output, matching the "spend" fx
    /// semantics: `threshold`-of-`addresses`.
    pub fn addresses(&self) -> &[short::Id] {
        &self.owner.addresses
    }

    /// Encodes for persistent storage (keyed by `utxo_id.symbol()`).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let packer = crate::packer::Packer::new(1 << 20, 128);
        self.utxo_id.pack_into(&packer)?;
        packer.pack_bytes(self.asset_id.as_ref())?;
        self.owner.pack_fields(&packer)?;
        packer.pack_u64(self.amount)?;
        Ok(packer.take_bytes().to_vec())
    }

    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        let packer = crate::packer::Packer::load_bytes_for_unpack(1 << 20, b);
        let utxo_id = Id::unpack_from(&packer)?;
        let asset_id = ids::Id::from_slice(&packer.unpack_bytes(ids::LEN)?);
        let owner = OutputOwners::unpack_fields(&packer)?;
        let amount = packer.unpack_u64()?;
        Ok(Self {
            utxo_id,
            asset_id,
            owner,
            amount,
        })
    }
}

impl Ord for Utxo {
    fn cmp(&self, other: &Utxo) -> Ordering {
        self.utxo_id.cmp(&other.utxo_id)
    }
}

impl PartialOrd for Utxo {
    fn partial_cmp(&self, other: &Utxo) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Utxo {
    fn eq(&self, other: &Utxo) -> bool {
        self.utxo_id == other.utxo_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_utxo_ids() {
        let mut ids: Vec<Id> = (0..10)
            .rev()
            .map(|i| Id::new(ids::Id::from_slice(&[i as u8]), i))
            .collect();
        assert!(!cmp_manager::is_sorted_and_unique(&ids));
        ids.sort();
        assert!(cmp_manager::is_sorted_and_unique(&ids));
    }

    #[test]
    fn test_unlocked_at() {
        let utxo = Utxo::new(
            Id::default(),
            ids::Id::empty(),
            OutputOwners::new(100, 1, &[]),
            1,
        );
        assert!(!utxo.unlocked_at(50));
        assert!(utxo.unlocked_at(100));
        assert!(utxo.unlocked_at(150));
    }

    #[test]
    fn test_utxo_bytes_roundtrip() {
        let utxo = Utxo::new(
            Id::new(ids::Id::sha256("tx"), 3),
            ids::Id::sha256("asset"),
            OutputOwners::new(7, 1, &[short::Id::from_slice(&[1, 2, 3])]),
            12345,
        );
        let bytes = utxo.to_bytes().unwrap();
        let decoded = Utxo::from_bytes(&bytes).unwrap();
        assert_eq!(utxo, decoded);
        assert_eq!(decoded.amount, 12345);
    }
}
