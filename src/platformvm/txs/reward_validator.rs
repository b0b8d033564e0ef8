//! Resolves the staker whose interval has just ended: on Commit it is paid
//! its reward and removed; on Abort it is simply removed.
//! ref. §4.4 "RewardValidatorTx (proposal)"
use crate::{
    codec,
    errors::{Error, Result},
    ids,
    key::secp256k1::txs::OutputOwners,
    packer::Packer,
    platformvm::{
        stakers::Staker,
        state::Diff,
        txs::utxo,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Default)]
pub struct Tx {
    #[serde(rename = "txID")]
    pub tx_id: ids::Id,
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.RewardValidatorTx".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_unsigned(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        packer.pack_bytes(self.tx_id.as_ref())?;
        Ok(())
    }

    pub fn unsigned_tx_id(&self) -> Result<ids::Id> {
        let packer = Packer::new(64, 16);
        self.pack_unsigned(&packer)?;
        Ok(ids::Id::sha256(packer.take_bytes()))
    }

    /// ref. §4.4 "Arg: txID of the staker whose end == T(Σ) and who is
    /// first in current-by-end."
    pub fn semantic_verify(&self, diff: &Diff) -> Result<()> {
        let earliest = diff
            .current_stakers
            .peek_current_by_end()
            .ok_or_else(|| Error::semantic("no current staker to reward"))?;
        if earliest.tx_id != self.tx_id {
            return Err(Error::semantic("txID is not the earliest-ending current staker"));
        }
        if earliest.end_time > diff.timestamp {
            return Err(Error::semantic("staker has not yet reached its end time"));
        }
        Ok(())
    }

    /// ref. §8 scenario 4 "Reward flow": validator with `shares` (parts per
    /// million) and its current delegators split `potentialReward`
    /// proportionally to delegated weight; stake is always returned (the
    /// stake UTXO locked at admission simply becomes spendable once its
    /// locktime, the staker's `end_time`, has passed — no new output is
    /// needed for that half). `on_commit == false` reproduces Abort: stake
    /// unlocks, no reward is minted. Reward payouts are minted as new UTXOs
    /// owned by this RewardValidatorTx's own id, one per paid address, so
    /// the reward is immediately spendable like any other UTXO.
    pub fn execute(&self, diff: &mut Diff, on_commit: bool) -> Result<()> {
        let staker = diff
            .current_stakers
            .delete_current_staker(self.tx_id)
            .ok_or_else(|| Error::state("staker to reward is not current"))?;

        if on_commit && staker.potential_reward > 0 {
            let reward_tx_id = self.unsigned_tx_id()?;
            let mut idx = 0u32;

            let shares = staker.delegation_shares.unwrap_or(1_000_000) as u128;
            let delegators: Vec<Staker> = diff
                .current_stakers
                .current_delegators_of(staker.subnet_id, staker.node_id)
                .cloned()
                .collect();
            let total_delegated: u128 = delegators.iter().map(|d| d.weight as u128).sum();

            let mut delegator_total_reward: u128 = 0;
            for d in &delegators {
                let delegator_share = if total_delegated == 0 {
                    0
                } else {
                    (d.weight as u128) * 1_000_000 / total_delegated
                };
                let reward = (staker.potential_reward as u128) * delegator_share / 1_000_000 * shares / 1_000_000;
                delegator_total_reward += reward;
                if reward > 0 {
                    diff.put_utxo(utxo::Utxo::new(
                        utxo::Id::new(reward_tx_id, idx),
                        ids::Id::empty(),
                        OutputOwners::new(0, 1, &[d.reward_address]),
                        reward as u64,
                    ))?;
                    idx += 1;
                }
                diff.supply = diff
                    .supply
                    .checked_add(reward as u64)
                    .ok_or_else(|| Error::state("supply overflow"))?;
            }
            let validator_reward = staker.potential_reward as u128 - delegator_total_reward;
            if validator_reward > 0 {
                diff.put_utxo(utxo::Utxo::new(
                    utxo::Id::new(reward_tx_id, idx),
                    ids::Id::empty(),
                    OutputOwners::new(0, 1, &[staker.reward_address]),
                    validator_reward as u64,
                ))?;
            }
            diff.supply = diff
                .supply
                .checked_add(validator_reward as u64)
                .ok_or_else(|| Error::state("supply overflow"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{node, short};

    fn staker(tx: u8, weight: u64, potential_reward: u64, shares: Option<u32>) -> Staker {
        Staker {
            tx_id: ids::Id::from_slice(&[tx]),
            node_id: node::Id::from_slice(&[1; node::LEN]),
            subnet_id: ids::Id::empty(),
            weight,
            start_time: 0,
            end_time: 1_000,
            reward_address: short::Id::empty(),
            delegation_shares: shares,
            potential_reward,
        }
    }

    #[test]
    fn test_semantic_verify_rejects_wrong_staker() {
        let state = crate::platformvm::state::State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.timestamp = 1_000;
        diff.current_stakers.add_current_staker(staker(1, 1_000, 10, Some(200_000)), 10);

        let tx = Tx { tx_id: ids::Id::from_slice(&[9]) };
        assert!(tx.semantic_verify(&diff).is_err());
    }

    #[test]
    fn test_execute_on_abort_removes_staker_without_reward() {
        let state = crate::platformvm::state::State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.supply = 1_000_000;
        diff.current_stakers.add_current_staker(staker(1, 1_000, 500, Some(200_000)), 500);

        let tx = Tx { tx_id: ids::Id::from_slice(&[1]) };
        tx.execute(&mut diff, false).unwrap();

        assert!(diff.current_stakers.peek_current_by_end().is_none());
        assert_eq!(diff.supply, 1_000_000);
    }

    /// ref. §8 scenario 4 "Reward flow": shares=200000 (20%), one delegator
    /// at 50% of the validator's own weight (so it is 100% of the total
    /// delegated weight) -> delegator gets 20% of P, validator gets 80%,
    /// both as freshly minted, spendable UTXOs, and supply grows by P.
    #[test]
    fn test_execute_on_commit_splits_reward_by_delegated_weight() {
        let state = crate::platformvm::state::State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.supply = 0;
        let validator_addr = short::Id::from_slice(&[1]);
        let delegator_addr = short::Id::from_slice(&[2]);
        let mut validator = staker(1, 1_000, 1_000_000, Some(200_000));
        validator.reward_address = validator_addr;
        diff.current_stakers.add_current_staker(validator.clone(), 1_000_000);

        let mut delegator = staker(2, 500, 0, None);
        delegator.node_id = validator.node_id;
        delegator.reward_address = delegator_addr;
        diff.current_stakers.add_current_staker(delegator, 0);

        // move the validator back to the front (delete_current_staker above
        // reordered by end time; both share the same end here so txID breaks
        // the tie — validator's txID [1] sorts before delegator's [2]).
        let tx = Tx { tx_id: ids::Id::from_slice(&[1]) };
        tx.execute(&mut diff, true).unwrap();

        assert_eq!(diff.supply, 1_000_000);
        assert_eq!(diff.current_stakers.current().len(), 1);

        let reward_tx_id = tx.unsigned_tx_id().unwrap();
        let delegator_utxo = diff
            .get_utxo(&crate::platformvm::txs::utxo::Id::new(reward_tx_id, 0))
            .unwrap()
            .unwrap();
        assert_eq!(delegator_utxo.amount, 200_000);
        assert_eq!(delegator_utxo.addresses(), &[delegator_addr]);

        let validator_utxo = diff
            .get_utxo(&crate::platformvm::txs::utxo::Id::new(reward_tx_id, 1))
            .unwrap()
            .unwrap();
        assert_eq!(validator_utxo.amount, 800_000);
        assert_eq!(validator_utxo.addresses(), &[validator_addr]);
    }

    #[test]
    fn test_execute_on_commit_with_no_delegators_pays_validator_everything() {
        let state = crate::platformvm::state::State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.supply = 0;
        let validator_addr = short::Id::from_slice(&[5]);
        let mut validator = staker(1, 1_000, 500_000, Some(200_000));
        validator.reward_address = validator_addr;
        diff.current_stakers.add_current_staker(validator, 500_000);

        let tx = Tx { tx_id: ids::Id::from_slice(&[1]) };
        tx.execute(&mut diff, true).unwrap();

        assert_eq!(diff.supply, 500_000);
        let reward_tx_id = tx.unsigned_tx_id().unwrap();
        let utxo = diff
            .get_utxo(&crate::platformvm::txs::utxo::Id::new(reward_tx_id, 0))
            .unwrap()
            .unwrap();
        assert_eq!(utxo.amount, 500_000);
    }
}
