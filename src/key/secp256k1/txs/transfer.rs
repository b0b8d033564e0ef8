use std::cmp::Ordering;

use crate::{
    codec,
    errors::{Error, Result},
    key,
    packer::Packer,
};
use serde::{Deserialize, Serialize};

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/secp256k1fx#TransferOutput>
#[derive(Debug, Serialize, Deserialize, Eq, Clone, Default)]
pub struct Output {
    pub amount: u64,

    /// Embedded at the same JSON level as "amount", matching avalanchego's wire shape.
    #[serde(flatten)]
    pub output_owners: key::secp256k1::txs::OutputOwners,
}

impl Output {
    pub fn new(amount: u64, output_owners: key::secp256k1::txs::OutputOwners) -> Self {
        Self {
            amount,
            output_owners,
        }
    }

    pub fn type_name() -> String {
        "secp256k1fx.TransferOutput".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        packer.pack_u64(self.amount)?;
        self.output_owners.pack_fields(packer)?;
        Ok(())
    }

    pub fn unpack_from(packer: &Packer) -> Result<Self> {
        let _type_id = packer.unpack_u32()?;
        let amount = packer.unpack_u64()?;
        let output_owners = key::secp256k1::txs::OutputOwners::unpack_fields(packer)?;
        Ok(Self {
            amount,
            output_owners,
        })
    }
}

impl Ord for Output {
    fn cmp(&self, other: &Output) -> Ordering {
        self.amount
            .cmp(&(other.amount))
            .then_with(|| self.output_owners.cmp(&(other.output_owners)))
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

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/secp256k1fx#TransferInput>
#[derive(Debug, Serialize, Deserialize, Eq, Clone, Default)]
pub struct Input {
    pub amount: u64,
    #[serde(rename = "signatureIndices")]
    pub sig_indices: Vec<u32>,
}

impl Input {
    pub fn new(amount: u64, sig_indices: Vec<u32>) -> Self {
        Self {
            amount,
            sig_indices,
        }
    }

    pub fn type_name() -> String {
        "secp256k1fx.TransferInput".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn verify(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(Error::semantic("input has no value"));
        }
        if !cmp_manager::is_sorted_and_unique(&self.sig_indices) {
            return Err(Error::syntactic("signatures not sorted and unique"));
        }
        Ok(())
    }

    /// ref. "vms/secp256k1fx.Input.Cost"
    pub fn sig_costs(&self) -> u64 {
        (self.sig_indices.len() as u64) * 1000
    }

    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        packer.pack_u64(self.amount)?;
        packer.pack_u32(self.sig_indices.len() as u32)?;
        for idx in &self.sig_indices {
            packer.pack_u32(*idx)?;
        }
        Ok(())
    }

    pub fn unpack_from(packer: &Packer) -> Result<Self> {
        let _type_id = packer.unpack_u32()?;
        let amount = packer.unpack_u64()?;
        let n = packer.unpack_u32()? as usize;
        let mut sig_indices = Vec::with_capacity(n);
        for _ in 0..n {
            sig_indices.push(packer.unpack_u32()?);
        }
        Ok(Self {
            amount,
            sig_indices,
        })
    }
}

impl Ord for Input {
    fn cmp(&self, other: &Input) -> Ordering {
        self.amount.cmp(&(other.amount)).then_with(|| {
            key::secp256k1::txs::SigIndices::new(&self.sig_indices)
                .cmp(&key::secp256k1::txs::SigIndices::new(&other.sig_indices))
        })
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::short;

    #[test]
    fn test_transfer_input_verify_rejects_zero_amount() {
        let input = Input::new(0, vec![0]);
        assert!(input.verify().is_err());
    }

    #[test]
    fn test_transfer_input_verify_rejects_unsorted_sig_indices() {
        let input = Input::new(1, vec![1, 0]);
        assert!(input.verify().is_err());
    }

    #[test]
    fn test_sort_transfer_outputs() {
        let mut outputs: Vec<Output> = Vec::new();
        for i in (0..5).rev() {
            outputs.push(Output {
                amount: i as u64,
                output_owners: key::secp256k1::txs::OutputOwners {
                    locktime: 0,
                    threshold: 1,
                    addresses: vec![short::Id::from_slice(&[i as u8])],
                },
            });
        }
        assert!(!cmp_manager::is_sorted_and_unique(&outputs));
        outputs.sort();
        assert!(cmp_manager::is_sorted_and_unique(&outputs));
    }
}
