//! Tunable staking parameters threaded through `Vm::initialize` and never
//! mutated afterward.
//!
//! ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/config#Config> (subset)
use serde::{Deserialize, Serialize};

/// Protocol parameters for the staking state machine. Constructed once at
/// `Initialize` from genesis/config bytes; every verify/execute path reads
/// from an `&Config`, none mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub min_validator_stake: u64,
    pub max_validator_stake: u64,
    pub min_delegator_stake: u64,
    /// Floor on `AddValidatorTx.shares`, in parts-per-million (same unit as
    /// `shares` itself, which ranges over `[0, 1_000_000]`).
    pub min_delegation_fee: u32,
    pub min_stake_duration_secs: u64,
    pub max_stake_duration_secs: u64,
    pub max_future_start_time_secs: u64,
    pub minting_period_secs: u64,
    pub max_supply: u64,
    pub uptime_requirement: f64,
    /// How far ahead of the wall clock an `AdvanceTimeTx` may advance `T`.
    pub sync_bound_secs: u64,
    /// Maximum number of decision txs batched into one Standard block.
    pub max_standard_block_txs: usize,

    /// Disables credential verification in `SemanticVerify` entirely. Off by
    /// default; see the crate's README for why there is no implicit or
    /// environment-driven path to turning this on.
    #[serde(default)]
    pub unsafe_disable_signature_checks: bool,
}

impl Config {
    /// Mainnet-shaped defaults.
    /// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/platformvm/txs#pkg-constants>
    pub fn default_mainnet() -> Self {
        const DAY: u64 = 24 * 60 * 60;
        Self {
            min_validator_stake: 2_000 * 1_000_000_000,
            max_validator_stake: 3_000_000 * 1_000_000_000,
            min_delegator_stake: 25 * 1_000_000_000,
            min_delegation_fee: 20_000,
            min_stake_duration_secs: 2 * 7 * DAY,
            max_stake_duration_secs: 365 * DAY,
            max_future_start_time_secs: 24 * 60 * 60,
            minting_period_secs: 365 * DAY,
            max_supply: 720_000_000 * 1_000_000_000,
            uptime_requirement: 0.8,
            sync_bound_secs: 10,
            max_standard_block_txs: 64,
            unsafe_disable_signature_checks: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_mainnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_signature_checking() {
        let cfg = Config::default();
        assert!(!cfg.unsafe_disable_signature_checks);
        assert!(cfg.min_validator_stake > 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = Config::default();
        let encoded = serde_json::to_string(&cfg).unwrap();
        let decoded: Config = serde_json::from_str(&encoded).unwrap();
        assert_eq!(cfg, decoded);
    }
}
