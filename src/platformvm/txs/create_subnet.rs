//! Registers a new subnet with a set of control keys and a signing
//! threshold. ref. §4.4 "CreateSubnetTx / CreateChainTx"
use crate::{
    codec,
    errors::{Error, Result},
    ids,
    key::secp256k1::txs::{Credential, OutputOwners},
    packer::Packer,
    platformvm::{
        state::{Diff, SubnetInfo},
        txs::BaseTx,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
pub struct Tx {
    pub base_tx: BaseTx,
    /// The control-key owner set and threshold for the new subnet.
    #[serde(rename = "subnetOwner")]
    pub owner: OutputOwners,
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.CreateSubnetTx".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_unsigned(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        self.base_tx.pack_into(packer)?;
        self.owner.pack_fields(packer)?;
        Ok(())
    }

    pub fn unsigned_tx_id(&self) -> Result<ids::Id> {
        let packer = Packer::new(1 << 20, 256);
        self.pack_unsigned(&packer)?;
        Ok(ids::Id::sha256(packer.take_bytes()))
    }

    pub fn verify_syntactic(&self, expected_network_id: u32, fee: u64) -> Result<()> {
        self.base_tx.verify_syntactic(expected_network_id)?;
        if self.owner.addresses.is_empty() {
            return Err(Error::syntactic("subnet owner has no control keys"));
        }
        if self.owner.threshold == 0 || self.owner.threshold as usize > self.owner.addresses.len() {
            return Err(Error::syntactic("subnet threshold out of bounds"));
        }
        self.base_tx.verify_conservation(fee, 0)?;
        Ok(())
    }

    /// Subnet IDs are derived from the creating tx, so collisions are
    /// impossible; nothing to check beyond the UTXOs being spendable.
    pub fn semantic_verify(&self, _diff: &Diff) -> Result<()> {
        Ok(())
    }

    pub fn execute(
        &self,
        diff: &mut Diff,
        creds: &[Credential],
        unsafe_disable_signature_checks: bool,
    ) -> Result<ids::Id> {
        let tx_id = self.unsigned_tx_id()?;
        let consumed = self.base_tx.authorize_and_consume(
            diff,
            creds,
            &tx_id,
            diff.timestamp,
            unsafe_disable_signature_checks,
        )?;
        for u in &consumed {
            diff.delete_utxo(&u.utxo_id)?;
        }

        let mut idx = 0u32;
        for out in &self.base_tx.outputs {
            diff.put_utxo(crate::platformvm::txs::utxo::Utxo::new(
                crate::platformvm::txs::utxo::Id::new(tx_id, idx),
                out.asset_id,
                out.output.output_owners.clone(),
                out.output.amount,
            ))?;
            idx += 1;
        }

        diff.put_subnet(
            tx_id,
            SubnetInfo {
                control_keys: self.owner.addresses.clone(),
                threshold: self.owner.threshold,
            },
        );
        Ok(tx_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ids::short, platformvm::state::State};

    fn sample_tx() -> Tx {
        Tx {
            base_tx: BaseTx {
                network_id: 1,
                blockchain_id: ids::Id::empty(),
                inputs: vec![],
                outputs: vec![],
                memo: None,
            },
            owner: OutputOwners::new(0, 1, &[short::Id::from_slice(&[1]), short::Id::from_slice(&[2])]),
        }
    }

    #[test]
    fn test_verify_syntactic_rejects_empty_control_keys() {
        let mut tx = sample_tx();
        tx.owner = OutputOwners::new(0, 0, &[]);
        assert!(tx.verify_syntactic(1, 0).is_err());
    }

    #[test]
    fn test_verify_syntactic_rejects_threshold_above_key_count() {
        let mut tx = sample_tx();
        tx.owner.threshold = 3;
        assert!(tx.verify_syntactic(1, 0).is_err());
    }

    #[test]
    fn test_execute_registers_subnet() {
        let tx = sample_tx();
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        let subnet_id = tx.execute(&mut diff, &[], true).unwrap();
        let info = diff.get_subnet(&subnet_id).unwrap().unwrap();
        assert_eq!(info.threshold, 1);
        assert_eq!(info.control_keys.len(), 2);
    }
}
