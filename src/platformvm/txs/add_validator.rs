//! Stakes funds on the primary network for a new validator.
//! ref. §4.4 "AddValidatorTx"
use crate::{
    codec,
    config::Config,
    errors::{Error, Result},
    ids,
    key::secp256k1::txs::{Credential, OutputOwners},
    packer::Packer,
    platformvm::{
        reward,
        stakers::Staker,
        state::Diff,
        txs::{transferable, utxo, validator::Validator, BaseTx},
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
pub struct Tx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    pub stake: Vec<transferable::Output>,
    #[serde(rename = "rewardsOwner")]
    pub rewards_owner: OutputOwners,
    pub shares: u32,
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.AddValidatorTx".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_unsigned(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        self.base_tx.pack_into(packer)?;
        self.validator.pack_into(packer)?;
        packer.pack_u32(self.stake.len() as u32)?;
        for s in &self.stake {
            s.pack_into(packer)?;
        }
        self.rewards_owner.pack_fields(packer)?;
        packer.pack_u32(self.shares)?;
        Ok(())
    }

    pub fn unsigned_tx_id(&self) -> Result<ids::Id> {
        let packer = Packer::new(1 << 20, 256);
        self.pack_unsigned(&packer)?;
        Ok(ids::Id::sha256(packer.take_bytes()))
    }

    fn stake_amount(&self) -> u64 {
        self.stake.iter().map(|o| o.output.amount).sum()
    }

    /// ref. §4.4 "non-nil; correct networkID; weight >= minValidatorStake;
    /// minStakeDuration <= end-start <= maxStakeDuration; shares >=
    /// minDelegationFee; consumed==produced+fee; inputs sorted and
    /// unique; outputs sorted."
    pub fn verify_syntactic(&self, expected_network_id: u32, config: &Config, fee: u64) -> Result<()> {
        self.base_tx.verify_syntactic(expected_network_id)?;
        if self.validator.weight < config.min_validator_stake {
            return Err(Error::syntactic("validator weight below minimum"));
        }
        if self.validator.weight != self.stake_amount() {
            return Err(Error::syntactic("validator weight != staked amount"));
        }
        let duration = self.validator.duration()?;
        if duration < config.min_stake_duration_secs || duration > config.max_stake_duration_secs {
            return Err(Error::syntactic("stake duration out of bounds"));
        }
        if self.shares < config.min_delegation_fee || self.shares > 1_000_000 {
            return Err(Error::syntactic("delegation shares out of bounds"));
        }
        self.base_tx.verify_conservation(fee, 0)?;
        Ok(())
    }

    /// ref. §4.4 "nodeID not already in current/pending for primary
    /// network; start > T(Σ); start - T(Σ) <= maxFutureStartTime;
    /// credentials authorize inputs; all consumed UTXOs exist and
    /// unlocked appropriately."
    pub fn semantic_verify(&self, diff: &Diff, config: &Config) -> Result<()> {
        if diff.current_stakers.has_primary_validator(self.validator.node_id)
            || diff.pending_stakers.has_primary_validator(self.validator.node_id)
        {
            return Err(Error::semantic("node is already a primary network validator"));
        }
        if self.validator.start <= diff.timestamp {
            return Err(Error::semantic("start time not in the future"));
        }
        if self.validator.start - diff.timestamp > config.max_future_start_time_secs {
            return Err(Error::semantic("start time too far in the future"));
        }
        Ok(())
    }

    /// Consumes the tx's inputs, emits its change outputs and locked stake
    /// outputs, and admits a new pending staker.
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
            diff.put_utxo(utxo::Utxo::new(utxo::Id::new(tx_id, idx), out.asset_id, out.output.output_owners.clone(), out.output.amount))?;
            idx += 1;
        }
        for out in &self.stake {
            let mut owner = out.output.output_owners.clone();
            owner.locktime = owner.locktime.max(self.validator.end);
            diff.put_utxo(utxo::Utxo::new(utxo::Id::new(tx_id, idx), out.asset_id, owner, out.output.amount))?;
            idx += 1;
        }

        let reward_address = self
            .rewards_owner
            .addresses
            .first()
            .copied()
            .ok_or_else(|| Error::semantic("rewardsOwner has no addresses"))?;
        diff.pending_stakers.add_pending_staker(Staker {
            tx_id,
            node_id: self.validator.node_id,
            subnet_id: ids::Id::empty(),
            weight: self.validator.weight,
            start_time: self.validator.start,
            end_time: self.validator.end,
            reward_address,
            delegation_shares: Some(self.shares),
            potential_reward: 0,
        });
        Ok(())
    }
}

/// Fixes `potentialReward` at the moment a pending validator becomes
/// current, using the supply observed at that instant.
/// ref. §4.6 "Reward Curve"
pub fn admit_as_current(staker: &mut Staker, supply: u64, uptime_ratio: f64, config: &Config) -> Result<()> {
    staker.potential_reward = reward::potential_reward(
        staker.weight,
        staker.end_time - staker.start_time,
        supply,
        uptime_ratio,
        config,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ids::{node, short},
        key::secp256k1::txs::transfer,
        platformvm::state::State,
    };

    fn sample_tx() -> Tx {
        let addr = short::Id::from_slice(&[9]);
        Tx {
            base_tx: BaseTx {
                network_id: 1,
                blockchain_id: ids::Id::empty(),
                inputs: vec![],
                outputs: vec![],
                memo: None,
            },
            validator: Validator::new(node::Id::from_slice(&[1; node::LEN]), 100, 100 + 14 * 24 * 3600, 2_000 * 1_000_000_000),
            stake: vec![transferable::Output::new(
                ids::Id::empty(),
                transfer::Output::new(2_000 * 1_000_000_000, OutputOwners::new(0, 1, &[addr])),
            )],
            rewards_owner: OutputOwners::new(0, 1, &[addr]),
            shares: 50_000,
        }
    }

    #[test]
    fn test_syntactic_verify_rejects_short_duration() {
        let mut tx = sample_tx();
        tx.validator.end = tx.validator.start + 10;
        let config = Config::default_mainnet();
        assert!(tx.verify_syntactic(1, &config, 0).is_err());
    }

    #[test]
    fn test_syntactic_verify_accepts_well_formed_tx() {
        let tx = sample_tx();
        let config = Config::default_mainnet();
        tx.verify_syntactic(1, &config, 0).unwrap();
    }

    #[test]
    fn test_semantic_verify_rejects_duplicate_validator() {
        let tx = sample_tx();
        let config = Config::default_mainnet();
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.current_stakers.add_current_staker(
            Staker {
                tx_id: ids::Id::sha256("other"),
                node_id: tx.validator.node_id,
                subnet_id: ids::Id::empty(),
                weight: tx.validator.weight,
                start_time: 0,
                end_time: tx.validator.end,
                reward_address: short::Id::empty(),
                delegation_shares: Some(0),
                potential_reward: 0,
            },
            0,
        );
        assert!(tx.semantic_verify(&diff, &config).is_err());
    }

    #[test]
    fn test_execute_admits_pending_staker_and_locks_stake() {
        let tx = sample_tx();
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        tx.execute(&mut diff, &[], true).unwrap();
        assert!(diff.pending_stakers.has_primary_validator(tx.validator.node_id));
    }
}
