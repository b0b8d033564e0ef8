use crate::errors::{Error, Result};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Length of a recoverable ECDSA signature: 64-byte (r, s) plus 1-byte
/// recovery code.
/// ref. "avalanchego/utils/crypto.PrivateKeySECP256K1R.SignHash"
pub const LEN: usize = 65;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sig(pub (Signature, RecoveryId));

impl Sig {
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        if b.len() != LEN {
            return Err(Error::syntactic("invalid signature length"));
        }

        let sig = Signature::try_from(&b[..64])
            .map_err(|e| Error::syntactic(format!("failed to load recoverable signature {}", e)))?;
        let recid = RecoveryId::try_from(b[64])
            .map_err(|e| Error::syntactic(format!("failed to create recovery Id {}", e)))?;
        Ok(Self((sig, recid)))
    }

    pub fn to_bytes(&self) -> [u8; LEN] {
        let bb = self.0 .0.to_bytes();
        let mut b = [0u8; LEN];
        b.copy_from_slice(&[&bb[..], &[u8::from(self.0 .1)]].concat());
        b
    }

    /// Recovers the public key that produced this signature over `digest`.
    pub fn recover_public_key(
        &self,
        digest: &[u8],
    ) -> Result<(crate::key::secp256k1::public_key::Key, VerifyingKey)> {
        let vkey = VerifyingKey::recover_from_prehash(digest, &self.0 .0, self.0 .1)
            .map_err(|e| Error::state(format!("failed recover_from_prehash {}", e)))?;
        Ok((vkey.into(), vkey))
    }
}

impl<'de> Deserialize<'de> for Sig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let val =
            String::deserialize(deserializer).and_then(|s| hex::decode(s).map_err(Error::custom))?;
        Self::from_bytes(&val).map_err(Error::custom)
    }
}

impl Serialize for Sig {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(self.to_bytes()))
    }
}

impl From<Sig> for Signature {
    fn from(sig: Sig) -> Self {
        sig.0 .0
    }
}

impl From<Sig> for [u8; LEN] {
    fn from(sig: Sig) -> Self {
        sig.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash;

    #[test]
    fn test_signature_recover() {
        let pk = crate::key::secp256k1::private_key::Key::generate().unwrap();
        let pubkey = pk.to_public_key();

        let hashed = hash::sha256(b"hello platformvm");
        let sig = pk.sign_digest(&hashed).unwrap();
        assert_eq!(sig.to_bytes().len(), LEN);

        let (recovered_pubkey, _) = sig.recover_public_key(&hashed).unwrap();
        assert_eq!(pubkey, recovered_pubkey);
    }

    #[test]
    fn test_signature_serialization() {
        #[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
        struct Data {
            sig: Sig,
        }
        let pk = crate::key::secp256k1::private_key::Key::generate().unwrap();
        let hashed = hash::sha256(b"hello platformvm");
        let sig = pk.sign_digest(&hashed).unwrap();
        let d = Data { sig: sig.clone() };

        let json_encoded = serde_json::to_string(&d).unwrap();
        let json_decoded = serde_json::from_str::<Data>(&json_encoded).unwrap();
        assert_eq!(sig, json_decoded.sig);
    }
}
