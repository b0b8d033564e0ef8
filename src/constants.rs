//! Network identifiers for the staking network.
use std::collections::HashMap;

use lazy_static::lazy_static;

pub const DEFAULT_CUSTOM_NETWORK_ID: u32 = 1000000;

pub const FALLBACK_HRP: &str = "custom";

/// "secp256k1fx" and platform-chain transactions are scoped to the primary
/// network; this is the subnet ID every validator implicitly joins.
lazy_static! {
    pub static ref NETWORK_ID_TO_NETWORK_NAME: HashMap<u32, &'static str> = {
        let mut m = HashMap::new();
        m.insert(1, "mainnet");
        m.insert(5, "fuji");
        m.insert(12345, "local");
        m
    };

    pub static ref NETWORK_ID_TO_HRP: HashMap<u32, &'static str> = {
        let mut m = HashMap::new();
        m.insert(1, "avax");
        m.insert(5, "fuji");
        m.insert(12345, "local");
        m
    };
}
