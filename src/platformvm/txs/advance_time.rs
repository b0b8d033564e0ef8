//! Advances the chain's notion of time. ref. §4.4 "AdvanceTimeTx (proposal)"
use crate::{
    codec,
    config::Config,
    errors::{Error, Result},
    ids,
    packer::Packer,
    platformvm::{stakers::Staker, state::Diff},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Default)]
pub struct Tx {
    #[serde(rename = "time")]
    pub new_time: u64,
}

impl Tx {
    pub fn type_name() -> String {
        "platformvm.AdvanceTimeTx".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_unsigned(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        packer.pack_u64(self.new_time)?;
        Ok(())
    }

    pub fn unsigned_tx_id(&self) -> Result<ids::Id> {
        let packer = Packer::new(64, 16);
        self.pack_unsigned(&packer)?;
        Ok(ids::Id::sha256(packer.take_bytes()))
    }

    /// ref. §4.4 "Accept iff T(Σ) < newT ≤ wallClock + syncBound and newT ≤
    /// earliestPendingStart ∨ newT ≤ earliestCurrentEnd."
    pub fn semantic_verify(&self, diff: &Diff, wall_clock: u64, config: &Config) -> Result<()> {
        if self.new_time <= diff.timestamp {
            return Err(Error::semantic("newT does not advance chain time"));
        }
        if self.new_time > wall_clock + config.sync_bound_secs {
            return Err(Error::semantic("newT too far ahead of wall clock"));
        }
        let earliest_pending_start = diff.pending_stakers.peek_pending_by_start().map(|s| s.start_time);
        let earliest_current_end = diff.current_stakers.peek_current_by_end().map(|s| s.end_time);
        let bounded = earliest_pending_start.is_some_and(|t| self.new_time <= t)
            || earliest_current_end.is_some_and(|t| self.new_time <= t);
        if !bounded {
            return Err(Error::semantic("newT exceeds next relevant staker boundary"));
        }
        Ok(())
    }

    /// Advances `diff.timestamp` and promotes any pending stakers whose
    /// start has now been crossed into current.
    pub fn execute(&self, diff: &mut Diff, config: &Config, uptime_ratio: f64) -> Result<()> {
        diff.timestamp = self.new_time;
        loop {
            let Some(next) = diff.pending_stakers.peek_pending_by_start() else {
                break;
            };
            if next.start_time > diff.timestamp {
                break;
            }
            let tx_id = next.tx_id;
            let mut staker: Staker = diff.pending_stakers.remove_pending_by_tx(tx_id).unwrap();
            crate::platformvm::txs::add_validator::admit_as_current(&mut staker, diff.supply, uptime_ratio, config)?;
            let reward = staker.potential_reward;
            diff.current_stakers.add_current_staker(staker, reward);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ids::{node, short}, platformvm::state::State};

    fn pending_staker(node_id: node::Id, start: u64, end: u64) -> Staker {
        Staker {
            tx_id: ids::Id::sha256("s1"),
            node_id,
            subnet_id: ids::Id::empty(),
            weight: 2_000 * 1_000_000_000,
            start_time: start,
            end_time: end,
            reward_address: short::Id::empty(),
            delegation_shares: Some(20_000),
            potential_reward: 0,
        }
    }

    #[test]
    fn test_semantic_verify_rejects_non_advancing_time() {
        let config = Config::default_mainnet();
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        diff.timestamp = 1_000;
        let tx = Tx { new_time: 1_000 };
        assert!(tx.semantic_verify(&diff, 1_000, &config).is_err());
    }

    #[test]
    fn test_semantic_verify_rejects_time_beyond_sync_bound() {
        let config = Config::default_mainnet();
        let state = State::new_in_memory();
        let diff = state.new_diff(None);
        let tx = Tx {
            new_time: 1_000 + config.sync_bound_secs + 100,
        };
        assert!(tx.semantic_verify(&diff, 1_000, &config).is_err());
    }

    #[test]
    fn test_execute_promotes_pending_staker_whose_start_is_crossed() {
        let config = Config::default_mainnet();
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        let node_id = node::Id::from_slice(&[1; node::LEN]);
        diff.pending_stakers.add_pending_staker(pending_staker(node_id, 500, 5_000));

        let tx = Tx { new_time: 500 };
        tx.execute(&mut diff, &config, 1.0).unwrap();

        assert!(diff.current_stakers.has_primary_validator(node_id));
        assert!(!diff.pending_stakers.has_primary_validator(node_id));
        assert_eq!(diff.timestamp, 500);
    }
}
