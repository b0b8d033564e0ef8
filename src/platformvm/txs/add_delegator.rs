//! Delegates stake to an existing primary-network validator.
//! ref. §4.4 "AddDelegatorTx"
use crate::{
    codec,
    config::Config,
    errors::{Error, Result},
    ids,
    key::secp256k1::txs::{Credential, OutputOwners},
    packer::Packer,
    platformvm::{
        stakers::{max_concurrent_weight, Staker},
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
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.AddDelegatorTx".to_string()
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

    pub fn verify_syntactic(&self, expected_network_id: u32, config: &Config, fee: u64) -> Result<()> {
        self.base_tx.verify_syntactic(expected_network_id)?;
        if self.validator.weight < config.min_delegator_stake {
            return Err(Error::syntactic("delegator weight below minimum"));
        }
        if self.validator.weight != self.stake_amount() {
            return Err(Error::syntactic("delegator weight != staked amount"));
        }
        let duration = self.validator.duration()?;
        if duration < config.min_stake_duration_secs || duration > config.max_stake_duration_secs {
            return Err(Error::syntactic("stake duration out of bounds"));
        }
        self.base_tx.verify_conservation(fee, 0)?;
        Ok(())
    }

    /// ref. §4.4 "must name a nodeID that is either in current OR pending
    /// primary validators; delegator interval ⊆ validator interval;
    /// overdelegation check ... sweep-line of active weight."
    pub fn semantic_verify(&self, diff: &Diff, config: &Config) -> Result<()> {
        let validator = diff
            .current_stakers
            .primary_validator(self.validator.node_id)
            .or_else(|| diff.pending_stakers.primary_validator(self.validator.node_id))
            .ok_or_else(|| Error::semantic("nodeID is not a primary network validator"))?;

        if self.validator.start < validator.start_time || self.validator.end > validator.end_time {
            return Err(Error::semantic("delegator interval not inside validator interval"));
        }
        if self.validator.start <= diff.timestamp {
            return Err(Error::semantic("start time not in the future"));
        }
        if self.validator.start - diff.timestamp > config.max_future_start_time_secs {
            return Err(Error::semantic("start time too far in the future"));
        }

        let existing: Vec<&Staker> = diff
            .current_stakers
            .current_delegators_of(ids::Id::empty(), self.validator.node_id)
            .chain(diff.pending_stakers.current_delegators_of(ids::Id::empty(), self.validator.node_id))
            .collect();
        let max_weight = max_concurrent_weight(
            validator.weight,
            &existing,
            self.validator.start,
            self.validator.end,
            self.validator.weight,
        )?;
        if max_weight > config.max_validator_stake {
            return Err(Error::semantic("overdelegation: exceeds maxValidatorStake"));
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
            delegation_shares: None,
            potential_reward: 0,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ids::{node, short},
        key::secp256k1::txs::transfer,
        platformvm::state::State,
    };

    fn primary_validator(node_id: node::Id, start: u64, end: u64, weight: u64) -> Staker {
        Staker {
            tx_id: ids::Id::sha256("validator"),
            node_id,
            subnet_id: ids::Id::empty(),
            weight,
            start_time: start,
            end_time: end,
            reward_address: short::Id::empty(),
            delegation_shares: Some(20_000),
            potential_reward: 0,
        }
    }

    fn sample_tx(node_id: node::Id, start: u64, end: u64, weight: u64) -> Tx {
        let addr = short::Id::from_slice(&[7]);
        Tx {
            base_tx: BaseTx {
                network_id: 1,
                blockchain_id: ids::Id::empty(),
                inputs: vec![],
                outputs: vec![],
                memo: None,
            },
            validator: Validator::new(node_id, start, end, weight),
            stake: vec![transferable::Output::new(
                ids::Id::empty(),
                transfer::Output::new(weight, OutputOwners::new(0, 1, &[addr])),
            )],
            rewards_owner: OutputOwners::new(0, 1, &[addr]),
        }
    }

    #[test]
    fn test_semantic_verify_rejects_unknown_validator() {
        let config = Config::default_mainnet();
        let node_id = node::Id::from_slice(&[2; node::LEN]);
        let tx = sample_tx(node_id, 1_000, 1_000 + 100, config.min_delegator_stake);
        let state = State::new_in_memory();
        let diff = state.new_diff(None);
        assert!(tx.semantic_verify(&diff, &config).is_err());
    }

    #[test]
    fn test_semantic_verify_rejects_interval_outside_validator() {
        let config = Config::default_mainnet();
        let node_id = node::Id::from_slice(&[3; node::LEN]);
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.current_stakers
            .add_current_staker(primary_validator(node_id, 500, 5_000, config.max_validator_stake), 0);

        let tx = sample_tx(node_id, 4_000, 6_000, config.min_delegator_stake);
        assert!(tx.semantic_verify(&diff, &config).is_err());
    }

    /// ref. spec §8 scenario 3 "Overdelegation regression"
    #[test]
    fn test_semantic_verify_rejects_overdelegation() {
        let config = Config::default_mainnet();
        let node_id = node::Id::from_slice(&[4; node::LEN]);
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.timestamp = 0;
        diff.current_stakers
            .add_current_staker(primary_validator(node_id, 0, 1_000_000, config.min_validator_stake), 0);

        // first delegator takes nearly the whole remaining headroom.
        let d1 = sample_tx(node_id, 1_000, 500_000, config.max_validator_stake - config.min_validator_stake);
        d1.semantic_verify(&diff, &config).unwrap();
        d1.execute(&mut diff, &[], true).unwrap();

        // second delegator overlaps d1 and would push weight over the cap.
        let d2 = sample_tx(node_id, 2_000, 400_000, config.min_delegator_stake);
        assert!(d2.semantic_verify(&diff, &config).is_err());
    }
}
