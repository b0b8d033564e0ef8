//! Moves platform-chain UTXOs to another chain. ref. §4.4 "ImportTx /
//! ExportTx (decision txs, passthrough scope)"
//!
//! As with `ImportTx`, the shared-memory handoff to the destination chain
//! is a Non-goal; only the local consumption of inputs and authorization
//! is modeled.
use crate::{
    codec,
    errors::Result,
    ids,
    key::secp256k1::txs::Credential,
    packer::Packer,
    platformvm::{
        state::Diff,
        txs::{transferable, BaseTx},
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
pub struct Tx {
    pub base_tx: BaseTx,
    #[serde(rename = "destinationChain")]
    pub destination_chain_id: ids::Id,
    #[serde(rename = "exportedOutputs")]
    pub exported_outputs: Vec<transferable::Output>,
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.ExportTx".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_unsigned(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        self.base_tx.pack_into(packer)?;
        packer.pack_bytes(self.destination_chain_id.as_ref())?;
        packer.pack_u32(self.exported_outputs.len() as u32)?;
        for out in &self.exported_outputs {
            out.pack_into(packer)?;
        }
        Ok(())
    }

    pub fn unsigned_tx_id(&self) -> Result<ids::Id> {
        let packer = Packer::new(1 << 20, 256);
        self.pack_unsigned(&packer)?;
        Ok(ids::Id::sha256(packer.take_bytes()))
    }

    fn exported_amount(&self) -> u64 {
        self.exported_outputs.iter().map(|o| o.output.amount).sum()
    }

    pub fn verify_syntactic(&self, expected_network_id: u32, fee: u64) -> Result<()> {
        self.base_tx.verify_syntactic(expected_network_id)?;
        if !super::is_sorted(&self.exported_outputs) {
            return Err(crate::errors::Error::syntactic("exported outputs not sorted"));
        }
        self.base_tx.verify_conservation(fee.saturating_add(self.exported_amount()), 0)?;
        Ok(())
    }

    pub fn semantic_verify(&self, diff: &Diff) -> Result<()> {
        for inp in &self.base_tx.inputs {
            diff.get_utxo(&inp.utxo_id)?
                .ok_or_else(|| crate::errors::Error::semantic("missing local utxo"))?;
        }
        Ok(())
    }

    pub fn execute(
        &self,
        diff: &mut Diff,
        creds: &[Credential],
        unsafe_disable_signature_checks: bool,
    ) -> Result<()> {
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
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ids::short, key::secp256k1::txs::{transfer, OutputOwners}, platformvm::state::State};

    fn sample_tx() -> Tx {
        Tx {
            base_tx: BaseTx {
                network_id: 1,
                blockchain_id: ids::Id::empty(),
                inputs: vec![transferable::Input::new(
                    crate::platformvm::txs::utxo::Id::new(ids::Id::sha256("in"), 0),
                    ids::Id::empty(),
                    transfer::Input::new(1_000, vec![0]),
                )],
                outputs: vec![],
                memo: None,
            },
            destination_chain_id: ids::Id::sha256("x-chain"),
            exported_outputs: vec![transferable::Output::new(
                ids::Id::empty(),
                transfer::Output::new(1_000, OutputOwners::new(0, 1, &[short::Id::empty()])),
            )],
        }
    }

    #[test]
    fn test_verify_syntactic_treats_exported_amount_as_consumed() {
        let tx = sample_tx();
        tx.verify_syntactic(1, 0).unwrap();
    }

    #[test]
    fn test_semantic_verify_rejects_missing_utxo() {
        let state = State::new_in_memory();
        let diff = state.new_diff(None);
        let tx = sample_tx();
        assert!(tx.semantic_verify(&diff).is_err());
    }
}
