//! secp256k1 keys, as used to own UTXOs and authorize transactions.
pub mod address;
pub mod private_key;
pub mod public_key;
pub mod signature;
pub mod txs;

use crate::{errors::Result, ids::short};

/// A read-only view over a key, implemented by both the private key (which
/// can derive it) and a standalone public key loaded from an address.
pub trait ReadOnly {
    fn short_address(&self) -> Result<short::Id>;
    fn short_address_bytes(&self) -> Result<Vec<u8>>;
    fn hrp_address(&self, network_id: u32, chain_id_alias: &str) -> Result<String>;
}

/// JSON-friendly bundle of a generated key's encodings, the shape returned
/// by key-generation tooling and accepted by genesis allocation configs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Info {
    pub private_key_cb58: Option<String>,
    pub private_key_hex: Option<String>,
    pub p_address: String,
    pub short_address: short::Id,
}
