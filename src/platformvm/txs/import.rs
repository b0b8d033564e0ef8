//! Pulls UTXOs exported from another chain onto the platform chain.
//! ref. §4.4 "ImportTx / ExportTx (decision txs, passthrough scope)"
//!
//! The shared-memory handshake with the source chain is a Non-goal; this
//! type verifies syntactically and, on the local side, checks that the
//! imported inputs are well-formed and authorized, but does not model
//! cross-chain UTXO removal.
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
    #[serde(rename = "sourceChain")]
    pub source_chain_id: ids::Id,
    #[serde(rename = "importedInputs")]
    pub imported_inputs: Vec<transferable::Input>,
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.ImportTx".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_unsigned(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        self.base_tx.pack_into(packer)?;
        packer.pack_bytes(self.source_chain_id.as_ref())?;
        packer.pack_u32(self.imported_inputs.len() as u32)?;
        for inp in &self.imported_inputs {
            inp.pack_into(packer)?;
        }
        Ok(())
    }

    pub fn unsigned_tx_id(&self) -> Result<ids::Id> {
        let packer = Packer::new(1 << 20, 256);
        self.pack_unsigned(&packer)?;
        Ok(ids::Id::sha256(packer.take_bytes()))
    }

    fn imported_amount(&self) -> u64 {
        self.imported_inputs.iter().map(|i| i.input.amount).sum()
    }

    pub fn verify_syntactic(&self, expected_network_id: u32, fee: u64) -> Result<()> {
        self.base_tx.verify_syntactic(expected_network_id)?;
        if !cmp_manager::is_sorted_and_unique(&self.imported_inputs) {
            return Err(crate::errors::Error::syntactic("imported inputs not sorted and unique"));
        }
        for inp in &self.imported_inputs {
            inp.input.verify()?;
        }
        self.base_tx.verify_conservation(fee, self.imported_amount())?;
        Ok(())
    }

    /// Local side only: every local (non-imported) input must be an
    /// existing, unlocked, authorized UTXO. Imported-input existence on the
    /// source chain is not modeled.
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
                inputs: vec![],
                outputs: vec![],
                memo: None,
            },
            source_chain_id: ids::Id::sha256("x-chain"),
            imported_inputs: vec![transferable::Input::new(
                crate::platformvm::txs::utxo::Id::new(ids::Id::sha256("src-tx"), 0),
                ids::Id::empty(),
                transfer::Input::new(500, vec![0]),
            )],
        }
    }

    #[test]
    fn test_verify_syntactic_checks_conservation_against_imported_amount() {
        let mut tx = sample_tx();
        tx.base_tx.outputs = vec![transferable::Output::new(
            ids::Id::empty(),
            transfer::Output::new(500, OutputOwners::new(0, 1, &[short::Id::empty()])),
        )];
        tx.verify_syntactic(1, 0).unwrap();
    }

    #[test]
    fn test_verify_syntactic_rejects_mismatched_conservation() {
        let mut tx = sample_tx();
        tx.base_tx.outputs = vec![transferable::Output::new(
            ids::Id::empty(),
            transfer::Output::new(999, OutputOwners::new(0, 1, &[short::Id::empty()])),
        )];
        assert!(tx.verify_syntactic(1, 0).is_err());
    }

    #[test]
    fn test_semantic_verify_rejects_missing_local_utxo() {
        let state = State::new_in_memory();
        let diff = state.new_diff(None);
        let mut tx = sample_tx();
        tx.base_tx.inputs = vec![transferable::Input::new(
            crate::platformvm::txs::utxo::Id::new(ids::Id::sha256("local"), 0),
            ids::Id::empty(),
            transfer::Input::new(1, vec![0]),
        )];
        assert!(tx.semantic_verify(&diff).is_err());
    }
}
