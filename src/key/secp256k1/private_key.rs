use crate::{
    errors::{Error, Result},
    formatting, hash,
    ids::short,
    key::secp256k1::{self, public_key::Key as PublicKey, signature::Sig},
};
use k256::{
    ecdsa::{hazmat::SignPrimitive, SigningKey},
    elliptic_curve::generic_array::GenericArray,
    SecretKey,
};
use ring::rand::{SecureRandom, SystemRandom};
use sha2::Sha256;

/// The size (in bytes) of a secret key.
pub const LEN: usize = 32;

pub const HEX_ENCODE_PREFIX: &str = "0x";
pub const CB58_ENCODE_PREFIX: &str = "PrivateKey-";

/// Wraps "k256::SecretKey" and "k256::ecdsa::SigningKey"; both zeroize on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key((SecretKey, SigningKey));

impl Key {
    pub fn generate() -> Result<Self> {
        let random = SystemRandom::new();
        let mut b = [0u8; LEN];
        random
            .fill(&mut b)
            .map_err(|e| Error::state(format!("failed to generate random bytes {}", e)))?;
        Self::from_bytes(&b)
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        if raw.len() != LEN {
            return Err(Error::syntactic(format!(
                "secret key must be {}-byte, got {}-byte",
                LEN,
                raw.len()
            )));
        }

        let sk = SecretKey::from_slice(raw)
            .map_err(|e| Error::syntactic(format!("failed SecretKey::from_slice {}", e)))?;
        let signing_key = SigningKey::from(sk.clone());
        Ok(Self((sk, signing_key)))
    }

    pub fn signing_key(&self) -> SigningKey {
        self.0 .1.clone()
    }

    pub fn to_bytes(&self) -> [u8; LEN] {
        let b = self.0 .0.to_bytes();
        let mut bb = [0u8; LEN];
        bb.copy_from_slice(&b);
        bb
    }

    /// Hex-encodes with a "0x" prefix.
    pub fn to_hex(&self) -> String {
        format!("{}{}", HEX_ENCODE_PREFIX, hex::encode(self.0 .0.to_bytes()))
    }

    pub fn from_hex<S>(s: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let ss: String = s.into();
        let ss = ss.trim_start_matches(HEX_ENCODE_PREFIX);
        let b = hex::decode(ss).map_err(|e| Error::syntactic(format!("failed hex::decode '{}'", e)))?;
        Self::from_bytes(&b)
    }

    /// CB58-encodes with a "PrivateKey-" prefix.
    pub fn to_cb58(&self) -> String {
        let enc = formatting::encode_cb58_with_checksum_string(&self.0 .0.to_bytes());
        format!("{}{}", CB58_ENCODE_PREFIX, enc)
    }

    pub fn from_cb58<S>(s: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let ss: String = s.into();
        let ss = ss.trim_start_matches(CB58_ENCODE_PREFIX);
        let b = formatting::decode_cb58_with_checksum(ss)
            .map_err(|e| Error::syntactic(format!("failed decode_cb58_with_checksum '{}'", e)))?;
        Self::from_bytes(&b)
    }

    pub fn to_public_key(&self) -> PublicKey {
        PublicKey::from(self.0 .0.public_key())
    }

    pub fn to_info(&self, network_id: u32) -> Result<secp256k1::Info> {
        let pubkey = self.to_public_key();
        Ok(secp256k1::Info {
            private_key_cb58: Some(self.to_cb58()),
            private_key_hex: Some(self.to_hex()),
            p_address: pubkey.to_hrp_address(network_id, "P")?,
            short_address: pubkey.to_short_id()?,
        })
    }

    /// Signs a 32-byte SHA256 digest, producing a 65-byte recoverable signature.
    /// ref. "avalanchego/utils/crypto.PrivateKeySECP256K1R.SignHash"
    pub fn sign_digest(&self, digest: &[u8]) -> Result<Sig> {
        if digest.len() != hash::SHA256_OUTPUT_LEN {
            return Err(Error::syntactic(format!(
                "sign_digest only takes {}-byte, got {}-byte",
                hash::SHA256_OUTPUT_LEN,
                digest.len()
            )));
        }

        let secret_scalar = self.0 .1.as_nonzero_scalar();
        let prehash = <[u8; 32]>::try_from(digest)
            .map_err(|e| Error::state(format!("failed to convert prehash '{}'", e)))?;
        let prehash = GenericArray::from_slice(&prehash);

        let (sig, recid) = secret_scalar
            .try_sign_prehashed_rfc6979::<Sha256>(prehash, &[])
            .map_err(|e| Error::state(format!("failed try_sign_prehashed_rfc6979 '{}'", e)))?;

        let recid = recid.ok_or_else(|| Error::state("no recovery Id found"))?;
        Ok(Sig((sig, recid)))
    }
}

impl From<&SecretKey> for Key {
    fn from(s: &SecretKey) -> Self {
        let signing_key = SigningKey::from(s);
        Self((s.clone(), signing_key))
    }
}

impl From<Key> for SecretKey {
    fn from(s: Key) -> Self {
        s.0 .0
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl secp256k1::ReadOnly for Key {
    fn short_address(&self) -> Result<short::Id> {
        self.to_public_key().to_short_id()
    }

    fn short_address_bytes(&self) -> Result<Vec<u8>> {
        self.to_public_key().to_short_bytes()
    }

    fn hrp_address(&self, network_id: u32, chain_id_alias: &str) -> Result<String> {
        self.to_public_key().to_hrp_address(network_id, chain_id_alias)
    }
}

/// Loads keys from newline-separated CB58 text (e.g. a test-network funded
/// keys file). Rejects duplicates.
pub fn load_cb58_keys(d: &[u8]) -> Result<Vec<Key>> {
    let text =
        std::str::from_utf8(d).map_err(|e| Error::syntactic(format!("failed utf8 decode {}", e)))?;

    let mut keys = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if !seen.insert(line.to_string()) {
            return Err(Error::syntactic(format!(
                "key at line {} already added before",
                i + 1
            )));
        }
        keys.push(Key::from_cb58(line)?);
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_key_roundtrip() {
        let hashed = hash::sha256(b"hello platformvm");

        let pk1 = Key::generate().unwrap();
        let sig1 = pk1.sign_digest(&hashed).unwrap();
        assert_eq!(sig1.to_bytes().len(), crate::key::secp256k1::signature::LEN);

        let raw_bytes = pk1.to_bytes();
        let pk2 = Key::from_bytes(&raw_bytes).unwrap();
        assert_eq!(pk1, pk2);

        let hex1 = pk1.to_hex();
        let pk3 = Key::from_hex(hex1).unwrap();
        assert_eq!(pk1, pk3);

        let cb1 = pk1.to_cb58();
        let pk4 = Key::from_cb58(cb1).unwrap();
        assert_eq!(pk1, pk4);
    }

    #[test]
    fn test_load_cb58_keys_rejects_duplicates() {
        let pk = Key::generate().unwrap();
        let line = pk.to_cb58();
        let text = format!("{}\n{}\n", line, line);
        assert!(load_cb58_keys(text.as_bytes()).is_err());
    }
}
