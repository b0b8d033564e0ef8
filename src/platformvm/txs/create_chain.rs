//! Registers a chain under an existing subnet and records its genesis
//! bytes. ref. §4.4 "CreateSubnetTx / CreateChainTx"
use crate::{
    codec,
    errors::{Error, Result},
    ids,
    key::secp256k1::txs::Credential,
    packer::Packer,
    platformvm::{
        state::{ChainInfo, Diff},
        txs::BaseTx,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
pub struct Tx {
    pub base_tx: BaseTx,
    #[serde(rename = "subnetID")]
    pub subnet_id: ids::Id,
    #[serde(rename = "chainName")]
    pub chain_name: String,
    #[serde(rename = "vmID")]
    pub vm_id: ids::Id,
    #[serde(rename = "genesisData")]
    pub genesis_data: Vec<u8>,
    /// Indices into the subnet's control key list authorizing this tx.
    #[serde(rename = "subnetAuth")]
    pub subnet_auth_sig_indices: Vec<u32>,
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.CreateChainTx".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_unsigned(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        self.base_tx.pack_into(packer)?;
        packer.pack_bytes(self.subnet_id.as_ref())?;
        packer.pack_str(&self.chain_name)?;
        packer.pack_bytes(self.vm_id.as_ref())?;
        packer.pack_bytes_with_header(&self.genesis_data)?;
        packer.pack_u32(self.subnet_auth_sig_indices.len() as u32)?;
        for idx in &self.subnet_auth_sig_indices {
            packer.pack_u32(*idx)?;
        }
        Ok(())
    }

    pub fn unsigned_tx_id(&self) -> Result<ids::Id> {
        let packer = Packer::new(1 << 24, 256);
        self.pack_unsigned(&packer)?;
        Ok(ids::Id::sha256(packer.take_bytes()))
    }

    pub fn verify_syntactic(&self, expected_network_id: u32, fee: u64) -> Result<()> {
        self.base_tx.verify_syntactic(expected_network_id)?;
        if self.chain_name.is_empty() || self.chain_name.len() > 128 {
            return Err(Error::syntactic("chain name out of bounds"));
        }
        if !cmp_manager::is_sorted_and_unique(&self.subnet_auth_sig_indices) {
            return Err(Error::syntactic("subnetAuth indices not sorted and unique"));
        }
        self.base_tx.verify_conservation(fee, 0)?;
        Ok(())
    }

    pub fn semantic_verify(&self, diff: &Diff) -> Result<()> {
        let subnet = diff
            .get_subnet(&self.subnet_id)?
            .ok_or_else(|| Error::semantic("unknown subnet"))?;
        if (self.subnet_auth_sig_indices.len() as u32) < subnet.threshold {
            return Err(Error::semantic("not enough signers for subnet threshold"));
        }
        for idx in &self.subnet_auth_sig_indices {
            if subnet.control_keys.get(*idx as usize).is_none() {
                return Err(Error::semantic("subnetAuth index out of bounds"));
            }
        }
        Ok(())
    }

    pub fn execute(
        &self,
        diff: &mut Diff,
        creds: &[Credential],
        unsafe_disable_signature_checks: bool,
    ) -> Result<ids::Id> {
        let tx_id = self.unsigned_tx_id()?;
        if creds.len() < self.base_tx.inputs.len() {
            return Err(Error::semantic("not enough credentials for subnetAuth"));
        }
        let (base_creds, subnet_creds) = creds.split_at(self.base_tx.inputs.len());
        let consumed = self.base_tx.authorize_and_consume(
            diff,
            base_creds,
            &tx_id,
            diff.timestamp,
            unsafe_disable_signature_checks,
        )?;
        for u in &consumed {
            diff.delete_utxo(&u.utxo_id)?;
        }

        if !unsafe_disable_signature_checks {
            let subnet = diff
                .get_subnet(&self.subnet_id)?
                .ok_or_else(|| Error::semantic("unknown subnet"))?;
            if subnet_creds.len() != self.subnet_auth_sig_indices.len() {
                return Err(Error::semantic("subnet credential count mismatch"));
            }
            for (cred, idx) in subnet_creds.iter().zip(self.subnet_auth_sig_indices.iter()) {
                let key = subnet
                    .control_keys
                    .get(*idx as usize)
                    .ok_or_else(|| Error::semantic("subnetAuth index out of bounds"))?;
                let sig = cred
                    .signatures
                    .first()
                    .ok_or_else(|| Error::semantic("subnet credential has no signature"))?;
                let recovered = crate::key::secp256k1::public_key::Key::from_signature(tx_id.as_ref(), sig)?;
                if recovered.to_short_id()? != *key {
                    return Err(Error::semantic("subnet credential does not authorize signer"));
                }
            }
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

        diff.put_chain(
            tx_id,
            ChainInfo {
                subnet_id: self.subnet_id,
                chain_name: self.chain_name.clone(),
                vm_id: self.vm_id,
                genesis_data: self.genesis_data.clone(),
            },
        );
        Ok(tx_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platformvm::state::{State, SubnetInfo};

    fn sample_tx(subnet_id: ids::Id) -> Tx {
        Tx {
            base_tx: BaseTx {
                network_id: 1,
                blockchain_id: ids::Id::empty(),
                inputs: vec![],
                outputs: vec![],
                memo: None,
            },
            subnet_id,
            chain_name: "my-chain".to_string(),
            vm_id: ids::Id::sha256("subnetevm"),
            genesis_data: vec![9, 9, 9],
            subnet_auth_sig_indices: vec![0],
        }
    }

    #[test]
    fn test_verify_syntactic_rejects_empty_chain_name() {
        let mut tx = sample_tx(ids::Id::empty());
        tx.chain_name = String::new();
        assert!(tx.verify_syntactic(1, 0).is_err());
    }

    #[test]
    fn test_semantic_verify_rejects_unknown_subnet() {
        let state = State::new_in_memory();
        let diff = state.new_diff(None);
        let tx = sample_tx(ids::Id::sha256("nope"));
        assert!(tx.semantic_verify(&diff).is_err());
    }

    #[test]
    fn test_execute_registers_chain() {
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        let subnet_id = ids::Id::sha256("subnet");
        diff.put_subnet(
            subnet_id,
            SubnetInfo {
                control_keys: vec![crate::ids::short::Id::from_slice(&[1])],
                threshold: 1,
            },
        );
        let tx = sample_tx(subnet_id);
        let chain_id = tx.execute(&mut diff, &[], true).unwrap();
        let info = diff.get_chain(&chain_id).unwrap().unwrap();
        assert_eq!(info.chain_name, "my-chain");
    }
}
