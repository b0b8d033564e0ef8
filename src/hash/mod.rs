//! Hash primitives used for content-addressed IDs and address derivation.
use ring::digest::{digest, SHA256};
use ripemd::{Digest, Ripemd160};

pub const SHA256_OUTPUT_LEN: usize = 32;

/// ref. <https://pkg.go.dev/crypto/sha256>
pub fn sha256(d: impl AsRef<[u8]>) -> Vec<u8> {
    let digest = digest(&SHA256, d.as_ref());
    digest.as_ref().to_vec()
}

/// "hashing.PubkeyBytesToAddress" without the CB58 encoding step.
/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/utils/hashing#PubkeyBytesToAddress>
pub fn sha256_ripemd160(d: impl AsRef<[u8]>) -> std::io::Result<Vec<u8>> {
    let sha256_hashed = sha256(d);

    let mut ripemd160_hasher = Ripemd160::new();
    ripemd160_hasher.update(sha256_hashed);
    let ripemd160_hashed = ripemd160_hasher.finalize();

    if ripemd160_hashed.len() != 20 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "ripemd160 output must be 20-byte, got {}",
                ripemd160_hashed.len()
            ),
        ));
    }

    Ok(ripemd160_hashed.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RUST_LOG=debug cargo test --lib -- hash::tests::test_sha256_ripemd160 --exact --show-output
    #[test]
    fn test_sha256_ripemd160() {
        let d: Vec<u8> = random_manager::secure_bytes(100).unwrap();
        let hashed = sha256_ripemd160(&d).unwrap();
        assert_eq!(hashed.len(), 20);
    }
}
