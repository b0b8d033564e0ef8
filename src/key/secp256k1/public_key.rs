use crate::{
    constants,
    errors::{Error, Result},
    formatting, hash,
    ids::short,
    key::secp256k1::{self, signature::Sig},
};
use k256::{
    ecdsa::{signature::hazmat::PrehashVerifier, VerifyingKey},
    pkcs8::DecodePublicKey,
    PublicKey,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The size (in bytes) of a compressed public key.
pub const LEN: usize = 33;

/// The size (in bytes) of an uncompressed public key.
pub const UNCOMPRESSED_LEN: usize = 65;

/// Wraps "k256::PublicKey"; serializes as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key(pub PublicKey);

impl Key {
    /// Decodes SEC1 (compressed or uncompressed) public key bytes.
    pub fn from_sec1_bytes(b: &[u8]) -> Result<Self> {
        let pubkey = PublicKey::from_sec1_bytes(b)
            .map_err(|e| Error::syntactic(format!("failed PublicKey::from_sec1_bytes {}", e)))?;
        Ok(Self(pubkey))
    }

    /// Decodes an ASN.1 DER-encoded public key.
    pub fn from_public_key_der(b: &[u8]) -> Result<Self> {
        let pubkey = PublicKey::from_public_key_der(b)
            .map_err(|e| Error::syntactic(format!("failed PublicKey::from_public_key_der {}", e)))?;
        Ok(Self(pubkey))
    }

    /// Recovers the public key from a message digest and its recoverable signature.
    pub fn from_signature(digest: &[u8], sig: &[u8]) -> Result<Self> {
        let sig = Sig::from_bytes(sig)?;
        let (pubkey, _) = sig.recover_public_key(digest)?;
        Ok(pubkey)
    }

    pub fn from_verifying_key(verifying_key: &VerifyingKey) -> Self {
        let pubkey: PublicKey = verifying_key.into();
        Self(pubkey)
    }

    pub fn to_verifying_key(&self) -> VerifyingKey {
        self.0.into()
    }

    /// Verifies a message digest against its recoverable signature.
    pub fn verify(&self, digest: &[u8], sig: &[u8]) -> Result<bool> {
        let sig = Sig::from_bytes(sig)?;
        let (recovered_pubkey, verifying_key) = sig.recover_public_key(digest)?;
        if verifying_key.verify_prehash(digest, &sig.0 .0).is_err() {
            return Ok(false);
        }
        Ok(*self == recovered_pubkey)
    }

    pub fn to_compressed_bytes(&self) -> [u8; LEN] {
        let vkey: VerifyingKey = self.0.into();
        let ep = vkey.to_encoded_point(true);
        let bb = ep.as_bytes();
        let mut b = [0u8; LEN];
        b.copy_from_slice(bb);
        b
    }

    pub fn to_uncompressed_bytes(&self) -> [u8; UNCOMPRESSED_LEN] {
        let vkey: VerifyingKey = self.0.into();
        let p = vkey.to_encoded_point(false);
        let mut b = [0u8; UNCOMPRESSED_LEN];
        b.copy_from_slice(p.as_bytes());
        b
    }

    /// "hashing.PubkeyBytesToAddress" applied to the compressed key.
    pub fn to_short_id(&self) -> Result<short::Id> {
        let compressed = self.to_compressed_bytes();
        short::Id::from_public_key_bytes(compressed)
            .map_err(|e| Error::state(format!("failed short::Id::from_public_key_bytes '{}'", e)))
    }

    pub fn to_short_bytes(&self) -> Result<Vec<u8>> {
        let compressed = self.to_compressed_bytes();
        hash::sha256_ripemd160(compressed)
            .map_err(|e| Error::state(format!("failed to_short_bytes '{}'", e)))
    }

    pub fn to_hrp_address(&self, network_id: u32, chain_id_alias: &str) -> Result<String> {
        let hrp = match constants::NETWORK_ID_TO_HRP.get(&network_id) {
            Some(v) => v,
            None => constants::FALLBACK_HRP,
        };
        let short_address_bytes = self.to_short_bytes()?;
        formatting::address(chain_id_alias, hrp, &short_address_bytes)
            .map_err(|e| Error::state(format!("failed formatting::address '{}'", e)))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let val =
            String::deserialize(deserializer).and_then(|s| hex::decode(s).map_err(Error::custom))?;
        Self::from_sec1_bytes(&val).map_err(Error::custom)
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(self.to_compressed_bytes()))
    }
}

impl From<PublicKey> for Key {
    fn from(pubkey: PublicKey) -> Self {
        Self(pubkey)
    }
}

impl From<Key> for PublicKey {
    fn from(k: Key) -> Self {
        k.0
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.to_compressed_bytes()))
    }
}

impl secp256k1::ReadOnly for Key {
    fn short_address(&self) -> Result<short::Id> {
        self.to_short_id()
    }

    fn short_address_bytes(&self) -> Result<Vec<u8>> {
        self.to_short_bytes()
    }

    fn hrp_address(&self, network_id: u32, chain_id_alias: &str) -> Result<String> {
        self.to_hrp_address(network_id, chain_id_alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_roundtrip_and_recover() {
        let pk1 = crate::key::secp256k1::private_key::Key::generate().unwrap();
        let pubkey1 = pk1.to_public_key();

        let b = pubkey1.to_compressed_bytes();
        let pubkey2 = Key::from_sec1_bytes(&b).unwrap();
        assert_eq!(pubkey1, pubkey2);

        let msg = b"hello platformvm";
        let hashed = hash::sha256(msg);

        let sig1 = pk1.sign_digest(&hashed).unwrap();
        assert_eq!(sig1.to_bytes().len(), crate::key::secp256k1::signature::LEN);

        let pubkey3 = Key::from_signature(&hashed, &sig1.to_bytes()).unwrap();
        assert_eq!(pubkey1, pubkey3);

        assert!(pubkey1.verify(&hashed, &sig1.to_bytes()).unwrap());
    }

    #[test]
    fn test_key_serialization() {
        #[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
        struct Data {
            key: Key,
        }
        let pk = crate::key::secp256k1::private_key::Key::generate().unwrap();
        let pubkey = pk.to_public_key();
        let d = Data { key: pubkey };

        let json_encoded = serde_json::to_string(&d).unwrap();
        let json_decoded = serde_json::from_str::<Data>(&json_encoded).unwrap();
        assert_eq!(pubkey, json_decoded.key);
    }
}
