//! The staking reward curve. ref. §4.6 "Reward Curve"
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::{config::Config, errors::{Error, Result}};

/// `stake * duration/mintingPeriod * (maxSupply-supply)/maxSupply * uptimeAdjustment`,
/// computed with a 256-bit-class unsigned intermediate so none of the three
/// multiplications can silently wrap before the divisions bring the result
/// back down to a `u64`. `observed_uptime_ratio` is `1.0` for a perfectly
/// up node; if it is below `config.uptime_requirement` the reward is zero
/// (the staker still gets its principal back, just no reward).
pub fn potential_reward(
    stake: u64,
    duration_secs: u64,
    supply: u64,
    observed_uptime_ratio: f64,
    config: &Config,
) -> Result<u64> {
    if observed_uptime_ratio < config.uptime_requirement {
        return Ok(0);
    }
    if config.minting_period_secs == 0 || config.max_supply == 0 {
        return Err(Error::state("reward curve misconfigured (zero denominator)"));
    }
    if supply > config.max_supply {
        return Err(Error::semantic("supply exceeds max_supply"));
    }

    let stake = BigUint::from(stake);
    let duration = BigUint::from(duration_secs);
    let minting_period = BigUint::from(config.minting_period_secs);
    let remaining_supply = BigUint::from(config.max_supply - supply);
    let max_supply = BigUint::from(config.max_supply);

    // uptimeAdjustment folded in as a fixed-point numerator/denominator
    // pair (parts-per-million) to keep the whole computation integral.
    const UPTIME_SCALE: u64 = 1_000_000;
    let uptime_numerator = BigUint::from((observed_uptime_ratio * UPTIME_SCALE as f64).round() as u64);
    let uptime_scale = BigUint::from(UPTIME_SCALE);

    let numerator = stake * duration * remaining_supply * uptime_numerator;
    let denominator = minting_period * max_supply * uptime_scale;

    let reward = numerator / denominator;
    reward
        .to_u64()
        .ok_or_else(|| Error::semantic("potential reward overflows u64"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let mut c = Config::default_mainnet();
        c.minting_period_secs = 365 * 24 * 3600;
        c.max_supply = 720_000_000_000_000_000;
        c.uptime_requirement = 0.8;
        c
    }

    #[test]
    fn test_zero_reward_below_uptime_requirement() {
        let config = test_config();
        let r = potential_reward(1_000_000, 1_000, 100_000_000_000_000, 0.5, &config).unwrap();
        assert_eq!(r, 0);
    }

    #[test]
    fn test_reward_scales_with_duration() {
        let config = test_config();
        let short = potential_reward(1_000_000, 1_000, 100_000_000_000_000, 1.0, &config).unwrap();
        let long = potential_reward(1_000_000, 2_000, 100_000_000_000_000, 1.0, &config).unwrap();
        assert!(long >= short);
        assert_eq!(long, short * 2);
    }

    #[test]
    fn test_reward_shrinks_as_supply_approaches_cap() {
        let config = test_config();
        let early = potential_reward(1_000_000, 1_000, 0, 1.0, &config).unwrap();
        let late = potential_reward(1_000_000, 1_000, config.max_supply - 1, 1.0, &config).unwrap();
        assert!(late < early);
    }

    #[test]
    fn test_supply_over_cap_is_semantic_error() {
        let config = test_config();
        let err = potential_reward(1, 1, config.max_supply + 1, 1.0, &config).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::Semantic);
    }
}
