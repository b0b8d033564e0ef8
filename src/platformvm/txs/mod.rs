//! Platform-chain transaction types: the four proposal txs (AddValidator,
//! AddDelegator, AddSubnetValidator, AdvanceTime) and the decision txs
//! (CreateSubnet, CreateChain, Import, Export, RewardValidator).
pub mod add_delegator;
pub mod add_subnet_validator;
pub mod add_validator;
pub mod advance_time;
pub mod create_chain;
pub mod create_subnet;
pub mod export;
pub mod import;
pub mod reward_validator;
pub mod transferable;
pub mod utxo;
pub mod validator;

use crate::{
    errors::{Error, Result},
    ids,
    key::secp256k1::txs::Credential,
    packer::Packer,
    platformvm::state::Diff,
};
use serde::{Deserialize, Serialize};

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/components/avax#BaseTx>
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
pub struct BaseTx {
    #[serde(rename = "networkID")]
    pub network_id: u32,
    #[serde(rename = "blockchainID")]
    pub blockchain_id: ids::Id,
    #[serde(rename = "inputs")]
    pub inputs: Vec<transferable::Input>,
    #[serde(rename = "outputs")]
    pub outputs: Vec<transferable::Output>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<Vec<u8>>,
}

impl BaseTx {
    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(self.network_id)?;
        packer.pack_bytes(self.blockchain_id.as_ref())?;
        packer.pack_u32(self.outputs.len() as u32)?;
        for out in &self.outputs {
            out.pack_into(packer)?;
        }
        packer.pack_u32(self.inputs.len() as u32)?;
        for inp in &self.inputs {
            inp.pack_into(packer)?;
        }
        let memo = self.memo.clone().unwrap_or_default();
        packer.pack_u32(memo.len() as u32)?;
        packer.pack_bytes(&memo)?;
        Ok(())
    }

    pub fn unpack_from(packer: &Packer) -> Result<Self> {
        let network_id = packer.unpack_u32()?;
        let blockchain_id = ids::Id::from_slice(&packer.unpack_bytes(ids::LEN)?);
        let n_outs = packer.unpack_u32()? as usize;
        let mut outputs = Vec::with_capacity(n_outs);
        for _ in 0..n_outs {
            outputs.push(transferable::Output::unpack_from(packer)?);
        }
        let n_ins = packer.unpack_u32()? as usize;
        let mut inputs = Vec::with_capacity(n_ins);
        for _ in 0..n_ins {
            inputs.push(transferable::Input::unpack_from(packer)?);
        }
        let memo_len = packer.unpack_u32()? as usize;
        let memo_bytes = packer.unpack_bytes(memo_len)?;
        let memo = if memo_bytes.is_empty() {
            None
        } else {
            Some(memo_bytes)
        };
        Ok(Self {
            network_id,
            blockchain_id,
            inputs,
            outputs,
            memo,
        })
    }

    pub fn total_input_amount(&self) -> u64 {
        self.inputs.iter().map(|i| i.input.amount).sum()
    }

    pub fn total_output_amount(&self) -> u64 {
        self.outputs.iter().map(|o| o.output.amount).sum()
    }

    /// Non-nil, correct network, sorted+unique inputs, sorted outputs, each
    /// input syntactically valid. ref. §4.1, §4.4.
    pub fn verify_syntactic(&self, expected_network_id: u32) -> Result<()> {
        if self.network_id != expected_network_id {
            return Err(Error::syntactic("wrong networkID"));
        }
        if !cmp_manager::is_sorted_and_unique(&self.inputs) {
            return Err(Error::syntactic("inputs not sorted and unique"));
        }
        if !is_sorted(&self.outputs) {
            return Err(Error::syntactic("outputs not sorted"));
        }
        for inp in &self.inputs {
            inp.input.verify()?;
        }
        Ok(())
    }

    /// Σ consumed + minted == Σ produced + fee. ref. §3 invariant 7.
    pub fn verify_conservation(&self, fee: u64, minted: u64) -> Result<()> {
        let total_in = self
            .total_input_amount()
            .checked_add(minted)
            .ok_or_else(|| Error::syntactic("input amount overflow"))?;
        let total_out = self
            .total_output_amount()
            .checked_add(fee)
            .ok_or_else(|| Error::syntactic("output amount overflow"))?;
        if total_in != total_out {
            return Err(Error::semantic(format!(
                "inputs + minted ({}) != outputs + fee ({})",
                total_in, total_out
            )));
        }
        Ok(())
    }

    /// Looks up every consumed UTXO in `diff`, checks asset/amount match and
    /// unlock time, authorizes the matching credential against the UTXO's
    /// owner, and returns the consumed UTXOs (for `Execute` to delete).
    /// `unsigned_tx_id` is the hash credentials were computed over.
    pub fn authorize_and_consume(
        &self,
        diff: &Diff,
        creds: &[Credential],
        unsigned_tx_id: &ids::Id,
        t: u64,
        unsafe_disable_signature_checks: bool,
    ) -> Result<Vec<utxo::Utxo>> {
        if creds.len() != self.inputs.len() {
            return Err(Error::semantic("credential count != input count"));
        }
        let mut consumed = Vec::with_capacity(self.inputs.len());
        for (inp, cred) in self.inputs.iter().zip(creds.iter()) {
            let u = diff
                .get_utxo(&inp.utxo_id)?
                .ok_or_else(|| Error::semantic(format!("missing utxo {:?}", inp.utxo_id)))?;
            if u.asset_id != inp.asset_id || u.amount != inp.input.amount {
                return Err(Error::semantic("utxo does not match input"));
            }
            if !u.unlocked_at(t) {
                return Err(Error::semantic("utxo is still locked"));
            }
            if !unsafe_disable_signature_checks {
                authorize_credential(&u.owner, &inp.input.sig_indices, cred, unsigned_tx_id.as_ref())?;
            }
            consumed.push(u);
        }
        Ok(consumed)
    }
}

/// Verifies that `cred`'s signatures, recovered over `digest`, name the
/// owner addresses at the positions `sig_indices` point to, and that enough
/// distinct signers are present to meet `owner.threshold`.
fn authorize_credential(
    owner: &crate::key::secp256k1::txs::OutputOwners,
    sig_indices: &[u32],
    cred: &Credential,
    digest: &[u8],
) -> Result<()> {
    if cred.signatures.len() != sig_indices.len() {
        return Err(Error::semantic("signature count != sig_indices count"));
    }
    if (sig_indices.len() as u32) < owner.threshold {
        return Err(Error::semantic("not enough signers for threshold"));
    }
    for (sig, idx) in cred.signatures.iter().zip(sig_indices.iter()) {
        let addr = owner
            .addresses
            .get(*idx as usize)
            .ok_or_else(|| Error::semantic("sig_indices out of bounds"))?;
        let recovered = crate::key::secp256k1::public_key::Key::from_signature(digest, sig)?;
        let recovered_addr = recovered.to_short_id()?;
        if recovered_addr != *addr {
            return Err(Error::semantic("credential does not authorize input"));
        }
    }
    Ok(())
}

fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// Status recorded in `tx/` for every tx that has reached a decision.
/// ref. §6 persistent layout "`tx/` -> txID -> {status, bytes}"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Processing,
    Committed,
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ids::short,
        key::secp256k1::{private_key::Key, txs::OutputOwners},
        platformvm::state::State,
    };

    fn sample_owned_utxo(owner_key: &Key, amount: u64) -> (utxo::Utxo, ids::Id) {
        let addr = owner_key.to_public_key().to_short_id().unwrap();
        let tx_id = ids::Id::sha256("some-tx");
        let u = utxo::Utxo::new(
            utxo::Id::new(tx_id, 0),
            ids::Id::empty(),
            OutputOwners::new(0, 1, &[addr]),
            amount,
        );
        (u, tx_id)
    }

    #[test]
    fn test_base_tx_roundtrip() {
        let base = BaseTx {
            network_id: 12345,
            blockchain_id: ids::Id::empty(),
            inputs: vec![],
            outputs: vec![transferable::Output::new(
                ids::Id::empty(),
                crate::key::secp256k1::txs::transfer::Output::new(
                    100,
                    OutputOwners::new(0, 1, &[short::Id::empty()]),
                ),
            )],
            memo: Some(vec![1, 2, 3]),
        };
        let packer = Packer::new(1 << 20, 128);
        base.pack_into(&packer).unwrap();
        let bytes = packer.take_bytes();
        let unpacker = Packer::load_bytes_for_unpack(1 << 20, &bytes);
        let decoded = BaseTx::unpack_from(&unpacker).unwrap();
        assert_eq!(base, decoded);
    }

    #[test]
    fn test_authorize_and_consume_rejects_wrong_signer() {
        let owner_key = Key::generate().unwrap();
        let other_key = Key::generate().unwrap();
        let (u, tx_id) = sample_owned_utxo(&owner_key, 1000);

        let mut state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.put_utxo(u.clone()).unwrap();

        let digest = ids::Id::sha256("unsigned-bytes");
        let sig = other_key.sign_digest(digest.as_ref()).unwrap();
        let cred = Credential::new(vec![sig.to_bytes().to_vec()]);

        let base = BaseTx {
            network_id: 1,
            blockchain_id: ids::Id::empty(),
            inputs: vec![transferable::Input::new(
                u.utxo_id,
                ids::Id::empty(),
                crate::key::secp256k1::txs::transfer::Input::new(1000, vec![0]),
            )],
            outputs: vec![],
            memo: None,
        };
        let _ = tx_id;
        let result = base.authorize_and_consume(&diff, &[cred], &digest, 0, false);
        assert!(result.is_err());
    }
}
