//! The platform-chain codec: a stable numeric tag per tx/block/fx variant,
//! shared across the whole type hierarchy so any encoded interface value can
//! be identified without a separate schema.
pub mod serde;

use std::collections::HashMap;

use lazy_static::lazy_static;

pub const VERSION: u16 = 0;

lazy_static! {
    /// ref. <https://github.com/ava-labs/avalanchego/blob/v1.9.11/vms/platformvm/txs/codec.go>
    pub static ref P_TYPES: HashMap<String, usize> = {
        let mut m = HashMap::new();
        m.insert("platformvm.ProposalBlock".to_string(), 0);
        m.insert("platformvm.AbortBlock".to_string(), 1);
        m.insert("platformvm.CommitBlock".to_string(), 2);
        m.insert("platformvm.StandardBlock".to_string(), 3);
        m.insert("platformvm.AtomicBlock".to_string(), 4);

        m.insert("secp256k1fx.TransferInput".to_string(), 5);
        m.insert("secp256k1fx.MintOutput".to_string(), 6);
        m.insert("secp256k1fx.TransferOutput".to_string(), 7);
        m.insert("secp256k1fx.MintOperation".to_string(), 8);
        m.insert("secp256k1fx.Credential".to_string(), 9);
        m.insert("secp256k1fx.Input".to_string(), 10);
        m.insert("secp256k1fx.OutputOwners".to_string(), 11);

        m.insert("platformvm.AddValidatorTx".to_string(), 12);
        m.insert("platformvm.AddSubnetValidatorTx".to_string(), 13);
        m.insert("platformvm.AddDelegatorTx".to_string(), 14);
        m.insert("platformvm.CreateChainTx".to_string(), 15);
        m.insert("platformvm.CreateSubnetTx".to_string(), 16);
        m.insert("platformvm.ImportTx".to_string(), 17);
        m.insert("platformvm.ExportTx".to_string(), 18);
        m.insert("platformvm.AdvanceTimeTx".to_string(), 19);
        m.insert("platformvm.RewardValidatorTx".to_string(), 20);
        m.insert("platformvm.StakeableLockIn".to_string(), 21);
        m.insert("platformvm.StakeableLockOut".to_string(), 22);
        m
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags_are_stable() {
        assert_eq!(P_TYPES["platformvm.AddValidatorTx"], 12);
        assert_eq!(P_TYPES["platformvm.AddDelegatorTx"], 14);
        assert_eq!(P_TYPES["platformvm.RewardValidatorTx"], 20);
        assert_eq!(P_TYPES["secp256k1fx.TransferOutput"], 7);
    }
}
