//! secp256k1 credential and ownership types shared by every transferable
//! input/output in the staking transaction set.
pub mod transfer;

use std::cmp::Ordering;

use crate::{
    codec::{self, serde::hex_0x_bytes::Hex0xBytes},
    errors::Result,
    ids::short,
    packer::Packer,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/secp256k1fx#Credential>
#[serde_as]
#[derive(Debug, Serialize, Deserialize, Eq, Clone, Default)]
pub struct Credential {
    /// Each signature is 65-byte recoverable ECDSA.
    #[serde_as(as = "Vec<Hex0xBytes>")]
    pub signatures: Vec<Vec<u8>>,
}

impl Credential {
    pub fn new(sigs: Vec<Vec<u8>>) -> Self {
        Self { signatures: sigs }
    }

    pub fn type_name() -> String {
        "secp256k1fx.Credential".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        packer.pack_u32(Self::type_id())?;
        packer.pack_u32(self.signatures.len() as u32)?;
        for sig in &self.signatures {
            packer.pack_bytes(sig)?;
        }
        Ok(())
    }

    pub fn unpack_from(packer: &Packer) -> Result<Self> {
        let _type_id = packer.unpack_u32()?;
        let n = packer.unpack_u32()? as usize;
        let mut signatures = Vec::with_capacity(n);
        for _ in 0..n {
            signatures.push(packer.unpack_bytes(crate::key::secp256k1::signature::LEN)?);
        }
        Ok(Self { signatures })
    }
}

impl Ord for Credential {
    fn cmp(&self, other: &Credential) -> Ordering {
        Signatures::new(&self.signatures).cmp(&Signatures::new(&other.signatures))
    }
}

impl PartialOrd for Credential {
    fn partial_cmp(&self, other: &Credential) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Credential) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

#[derive(Eq)]
pub struct Signatures(Vec<Vec<u8>>);

impl Signatures {
    pub fn new(sigs: &[Vec<u8>]) -> Self {
        Signatures(Vec::from(sigs))
    }
}

impl Ord for Signatures {
    fn cmp(&self, other: &Signatures) -> Ordering {
        let l1 = self.0.len();
        let l2 = other.0.len();
        l1.cmp(&l2).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Signatures {
    fn partial_cmp(&self, other: &Signatures) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Signatures {
    fn eq(&self, other: &Signatures) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

#[derive(Eq)]
pub struct SigIndices(Vec<u32>);

impl SigIndices {
    pub fn new(ids: &[u32]) -> Self {
        SigIndices(Vec::from(ids))
    }
}

impl Ord for SigIndices {
    fn cmp(&self, other: &SigIndices) -> Ordering {
        let l1 = self.0.len();
        let l2 = other.0.len();
        l1.cmp(&l2).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SigIndices {
    fn partial_cmp(&self, other: &SigIndices) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SigIndices {
    fn eq(&self, other: &SigIndices) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/secp256k1fx#OutputOwners>
#[derive(Debug, Serialize, Deserialize, Eq, Clone, Default)]
pub struct OutputOwners {
    pub locktime: u64,
    pub threshold: u32,
    pub addresses: Vec<short::Id>,
}

impl OutputOwners {
    pub fn new(locktime: u64, threshold: u32, addrs: &[short::Id]) -> Self {
        Self {
            locktime,
            threshold,
            addresses: Vec::from(addrs),
        }
    }

    pub fn type_name() -> String {
        "secp256k1fx.OutputOwners".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }

    pub fn pack_fields(&self, packer: &Packer) -> Result<()> {
        packer.pack_u64(self.locktime)?;
        packer.pack_u32(self.threshold)?;
        packer.pack_u32(self.addresses.len() as u32)?;
        for addr in &self.addresses {
            packer.pack_bytes(addr.as_ref())?;
        }
        Ok(())
    }

    pub fn unpack_fields(packer: &Packer) -> Result<Self> {
        let locktime = packer.unpack_u64()?;
        let threshold = packer.unpack_u32()?;
        let n = packer.unpack_u32()? as usize;
        let mut addresses = Vec::with_capacity(n);
        for _ in 0..n {
            addresses.push(short::Id::from_slice(&packer.unpack_bytes(short::LEN)?));
        }
        Ok(Self {
            locktime,
            threshold,
            addresses,
        })
    }

    /// Whether `sig_indices` signed by the given addresses (in order) would
    /// satisfy this owner set at time `t`: unlocked, enough distinct
    /// authorized addresses, indices within bounds and strictly increasing.
    pub fn is_authorized_by(&self, signer_addrs: &[short::Id], t: u64) -> bool {
        if self.locktime > t {
            return false;
        }
        if (signer_addrs.len() as u32) < self.threshold {
            return false;
        }
        signer_addrs.iter().all(|a| self.addresses.contains(a))
    }
}

impl Ord for OutputOwners {
    fn cmp(&self, other: &OutputOwners) -> Ordering {
        self.locktime
            .cmp(&(other.locktime))
            .then_with(|| self.threshold.cmp(&other.threshold))
            .then_with(|| short::Ids::new(&self.addresses).cmp(&short::Ids::new(&other.addresses)))
    }
}

impl PartialOrd for OutputOwners {
    fn partial_cmp(&self, other: &OutputOwners) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OutputOwners {
    fn eq(&self, other: &OutputOwners) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/vms/secp256k1fx#Input>
#[derive(Debug, Serialize, Deserialize, Eq, Clone, Default)]
pub struct Input {
    pub sig_indices: Vec<u32>,
}

impl Input {
    pub fn new(sig_indices: Vec<u32>) -> Self {
        Self { sig_indices }
    }

    pub fn type_name() -> String {
        "secp256k1fx.Input".to_string()
    }

    pub fn type_id() -> u32 {
        *(codec::P_TYPES.get(&Self::type_name()).unwrap()) as u32
    }
}

impl Ord for Input {
    fn cmp(&self, other: &Input) -> Ordering {
        SigIndices::new(&self.sig_indices).cmp(&SigIndices::new(&other.sig_indices))
    }
}

impl PartialOrd for Input {
    fn partial_cmp(&self, other: &Input) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Input) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_serde_roundtrip() {
        let d = Credential {
            signatures: vec![vec![123]],
        };
        let json_encoded = serde_json::to_string(&d).unwrap();
        let json_decoded = serde_json::from_str(&json_encoded).unwrap();
        assert_eq!(d, json_decoded);
    }

    #[test]
    fn test_sort_output_owners() {
        let mut owners: Vec<OutputOwners> = Vec::new();
        for i in (0..10).rev() {
            owners.push(OutputOwners {
                locktime: i as u64,
                threshold: i as u32,
                addresses: vec![short::Id::from_slice(&[i as u8, 1, 2, 3])],
            });
        }
        assert!(!cmp_manager::is_sorted_and_unique(&owners));
        owners.sort();
        assert!(cmp_manager::is_sorted_and_unique(&owners));
    }
}
