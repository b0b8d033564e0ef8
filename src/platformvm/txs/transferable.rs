//! Transferable inputs/outputs: the asset-tagged wrapper around a
//! secp256k1fx transfer output/input, as consumed/produced by every tx.
use std::cmp::Ordering;

use crate::{
    codec,
    errors::Result,
    ids,
    key::secp256k1::txs::transfer,
    packer::Packer,
    platformvm::txs::utxo,
};
use serde::{Deserialize, Serialize};

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/components/avax#TransferableOutput>
#[derive(Debug, Serialize, Deserialize, Eq, Clone)]
pub struct Output {
    #[serde(rename = "assetID")]
    pub asset_id: ids::Id,
    pub output: transfer::Output,
}

impl Output {
    pub fn new(asset_id: ids::Id, output: transfer::Output) -> Self {
        Self { asset_id, output }
    }

    pub fn type_id() -> u32 {
        transfer::Output::type_id()
    }

    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        packer.pack_bytes(self.asset_id.as_ref())?;
        self.output.pack_into(packer)?;
        Ok(())
    }

    pub fn unpack_from(packer: &Packer) -> Result<Self> {
        let asset_id = ids::Id::from_slice(&packer.unpack_bytes(ids::LEN)?);
        let output = transfer::Output::unpack_from(packer)?;
        Ok(Self { asset_id, output })
    }
}

impl Ord for Output {
    fn cmp(&self, other: &Output) -> Ordering {
        self.asset_id
            .cmp(&other.asset_id)
            .then_with(|| self.output.cmp(&other.output))
    }
}

impl PartialOrd for Output {
    fn partial_cmp(&self, other: &Output) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Output {
    fn eq(&self, other: &Output) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/components/avax#TransferableInput>
#[derive(Debug, Serialize, Deserialize, Eq, Clone)]
pub struct Input {
    #[serde(rename = "utxoID")]
    pub utxo_id: utxo::Id,
    #[serde(rename = "assetID")]
    pub asset_id: ids::Id,
    pub input: transfer::Input,
}

impl Input {
    pub fn new(utxo_id: utxo::Id, asset_id: ids::Id, input: transfer::Input) -> Self {
        Self {
            utxo_id,
            asset_id,
            input,
        }
    }

    pub fn type_id() -> u32 {
        transfer::Input::type_id()
    }

    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        self.utxo_id.pack_into(packer)?;
        packer.pack_bytes(self.asset_id.as_ref())?;
        self.input.pack_into(packer)?;
        Ok(())
    }

    pub fn unpack_from(packer: &Packer) -> Result<Self> {
        let utxo_id = utxo::Id::unpack_from(packer)?;
        let asset_id = ids::Id::from_slice(&packer.unpack_bytes(ids::LEN)?);
        let input = transfer::Input::unpack_from(packer)?;
        Ok(Self {
            utxo_id,
            asset_id,
            input,
        })
    }
}

impl Ord for Input {
    fn cmp(&self, other: &Input) -> Ordering {
        self.utxo_id.cmp(&other.utxo_id)
    }
}

impl PartialOrd for Input {
    fn partial_cmp(&self, other: &Input) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Input) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

#[allow(dead_code)]
fn _assert_type_registry_linked() -> u32 {
    codec::P_TYPES["secp256k1fx.TransferOutput"] as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ids::short, key::secp256k1::txs::OutputOwners};

    #[test]
    fn test_sort_transferable_outputs() {
        let mut outs: Vec<Output> = (0..5)
            .rev()
            .map(|i| {
                Output::new(
                    ids::Id::from_slice(&[1]),
                    transfer::Output::new(i as u64, OutputOwners::new(0, 1, &[short::Id::empty()])),
                )
            })
            .collect();
        assert!(!cmp_manager::is_sorted_and_unique(&outs));
        outs.sort();
        assert!(cmp_manager::is_sorted_and_unique(&outs));
    }
}
