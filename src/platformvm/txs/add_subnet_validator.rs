//! Adds a validator to a subnet other than the primary network.
//! ref. §4.4 "AddSubnetValidatorTx"
use crate::{
    codec,
    config::Config,
    errors::{Error, Result},
    ids,
    key::secp256k1::txs::Credential,
    packer::Packer,
    platformvm::{
        stakers::Staker,
        state::Diff,
        txs::{validator::Validator, BaseTx},
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
pub struct Tx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    #[serde(rename = "subnetID")]
    pub subnet_id: ids::Id,
    /// Indices into the subnet's control key list authorizing this tx,
    /// ascending and unique.
    #[serde(rename = "subnetAuth")]
    pub subnet_auth_sig_indices: Vec<u32>,
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.AddSubnetValidatorTx".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_unsigned(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        self.base_tx.pack_into(packer)?;
        self.validator.pack_into(packer)?;
        packer.pack_bytes(self.subnet_id.as_ref())?;
        packer.pack_u32(self.subnet_auth_sig_indices.len() as u32)?;
        for idx in &self.subnet_auth_sig_indices {
            packer.pack_u32(*idx)?;
        }
        Ok(())
    }

    pub fn unsigned_tx_id(&self) -> Result<ids::Id> {
        let packer = Packer::new(1 << 20, 256);
        self.pack_unsigned(&packer)?;
        Ok(ids::Id::sha256(packer.take_bytes()))
    }

    pub fn verify_syntactic(&self, expected_network_id: u32, config: &Config, fee: u64) -> Result<()> {
        self.base_tx.verify_syntactic(expected_network_id)?;
        let duration = self.validator.duration()?;
        if duration < config.min_stake_duration_secs || duration > config.max_stake_duration_secs {
            return Err(Error::syntactic("stake duration out of bounds"));
        }
        if !cmp_manager::is_sorted_and_unique(&self.subnet_auth_sig_indices) {
            return Err(Error::syntactic("subnetAuth indices not sorted and unique"));
        }
        self.base_tx.verify_conservation(fee, 0)?;
        Ok(())
    }

    /// ref. §4.4 "Interval ⊆ that node's primary validator interval; subnet
    /// control keys authorize."
    pub fn semantic_verify(&self, diff: &Diff, config: &Config) -> Result<()> {
        if diff.current_stakers.subnet_validator(self.subnet_id, self.validator.node_id).is_some()
            || diff.pending_stakers.subnet_validator(self.subnet_id, self.validator.node_id).is_some()
        {
            return Err(Error::semantic("node is already a validator on this subnet"));
        }
        let primary = diff
            .current_stakers
            .primary_validator(self.validator.node_id)
            .or_else(|| diff.pending_stakers.primary_validator(self.validator.node_id))
            .ok_or_else(|| Error::semantic("node is not a primary network validator"))?;
        if self.validator.start < primary.start_time || self.validator.end > primary.end_time {
            return Err(Error::semantic("subnet validator interval not inside primary interval"));
        }
        if self.validator.start <= diff.timestamp {
            return Err(Error::semantic("start time not in the future"));
        }
        if self.validator.start - diff.timestamp > config.max_future_start_time_secs {
            return Err(Error::semantic("start time too far in the future"));
        }

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

    /// Authorizes the fee inputs and the subnet control-key signatures (the
    /// tail of `creds`, one per `subnet_auth_sig_indices` entry), then admits
    /// a pending subnet staker.
    pub fn execute(
        &self,
        diff: &mut Diff,
        creds: &[Credential],
        unsafe_disable_signature_checks: bool,
    ) -> Result<()> {
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

        diff.pending_stakers.add_pending_staker(Staker {
            tx_id,
            node_id: self.validator.node_id,
            subnet_id: self.subnet_id,
            weight: self.validator.weight,
            start_time: self.validator.start,
            end_time: self.validator.end,
            reward_address: crate::ids::short::Id::empty(),
            delegation_shares: Some(0),
            potential_reward: 0,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ids::node,
        platformvm::state::{SubnetInfo, State},
    };

    fn sample_tx(node_id: node::Id, subnet_id: ids::Id, start: u64, end: u64) -> Tx {
        Tx {
            base_tx: BaseTx {
                network_id: 1,
                blockchain_id: ids::Id::empty(),
                inputs: vec![],
                outputs: vec![],
                memo: None,
            },
            validator: Validator::new(node_id, start, end, 1),
            subnet_id,
            subnet_auth_sig_indices: vec![0],
        }
    }

    #[test]
    fn test_semantic_verify_rejects_when_not_primary_validator() {
        let config = Config::default_mainnet();
        let node_id = node::Id::from_slice(&[5; node::LEN]);
        let state = State::new_in_memory();
        let diff = state.new_diff(None);
        let tx = sample_tx(node_id, ids::Id::sha256("subnet"), 1_000, 2_000);
        assert!(tx.semantic_verify(&diff, &config).is_err());
    }

    #[test]
    fn test_semantic_verify_rejects_interval_outside_primary() {
        let config = Config::default_mainnet();
        let node_id = node::Id::from_slice(&[6; node::LEN]);
        let subnet_id = ids::Id::sha256("subnet");
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.current_stakers.add_current_staker(
            Staker {
                tx_id: ids::Id::sha256("primary"),
                node_id,
                subnet_id: ids::Id::empty(),
                weight: config.min_validator_stake,
                start_time: 500,
                end_time: 5_000,
                reward_address: crate::ids::short::Id::empty(),
                delegation_shares: Some(0),
                potential_reward: 0,
            },
            0,
        );
        diff.put_subnet(
            subnet_id,
            SubnetInfo {
                control_keys: vec![crate::ids::short::Id::from_slice(&[1])],
                threshold: 1,
            },
        );
        let tx = sample_tx(node_id, subnet_id, 4_000, 6_000);
        assert!(tx.semantic_verify(&diff, &config).is_err());
    }

    #[test]
    fn test_semantic_verify_accepts_well_formed_tx() {
        let config = Config::default_mainnet();
        let node_id = node::Id::from_slice(&[7; node::LEN]);
        let subnet_id = ids::Id::sha256("subnet");
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.timestamp = 0;
        diff.current_stakers.add_current_staker(
            Staker {
                tx_id: ids::Id::sha256("primary"),
                node_id,
                subnet_id: ids::Id::empty(),
                weight: config.min_validator_stake,
                start_time: 0,
                end_time: 1_000_000,
                reward_address: crate::ids::short::Id::empty(),
                delegation_shares: Some(0),
                potential_reward: 0,
            },
            0,
        );
        diff.put_subnet(
            subnet_id,
            SubnetInfo {
                control_keys: vec![crate::ids::short::Id::from_slice(&[1])],
                threshold: 1,
            },
        );
        let tx = sample_tx(node_id, subnet_id, 1_000, 2_000);
        tx.semantic_verify(&diff, &config).unwrap();
    }
}
