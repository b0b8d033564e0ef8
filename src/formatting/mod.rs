//! CB58, checksummed-hex, and bech32 address formatting.
use std::io::{self, Error, ErrorKind};

use crate::hash;
use bech32::{ToBase32, Variant};
use bs58::{decode::DecodeBuilder, encode::EncodeBuilder, Alphabet};

const CHECKSUM_LENGTH: usize = 4;

/// Implements "formatting.EncodeWithChecksum" with "formatting.CB58".
/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/utils/formatting#EncodeWithChecksum>
pub fn encode_cb58_with_checksum_string(d: &[u8]) -> String {
    EncodeBuilder::new(d, Alphabet::DEFAULT)
        .as_cb58(None)
        .into_string()
}

pub fn encode_cb58_with_checksum_vec(d: &[u8]) -> Vec<u8> {
    EncodeBuilder::new(d, Alphabet::DEFAULT)
        .as_cb58(None)
        .into_vec()
}

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/utils/formatting#Decode>
pub fn decode_cb58_with_checksum(d: &str) -> io::Result<Vec<u8>> {
    DecodeBuilder::new(d, Alphabet::DEFAULT)
        .as_cb58(None)
        .into_vec()
        .map_err(|err| {
            let msg = match err {
                bs58::decode::Error::InvalidChecksum {
                    checksum,
                    expected_checksum,
                } => format!("invalid checksum {checksum:?} != {expected_checksum:?}"),
                _ => format!("failed to decode base58 ({err})"),
            };

            Error::new(ErrorKind::InvalidInput, msg)
        })
}

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/utils/formatting#EncodeWithChecksum>
pub fn encode_hex_with_checksum(d: &[u8]) -> String {
    let checksum = hash::sha256(d);
    let checksum_length = checksum.len();
    let checksum = &checksum[checksum_length - CHECKSUM_LENGTH..];

    let mut checked = d.to_vec();
    let mut checksum = checksum.to_vec();
    checked.append(&mut checksum);

    hex::encode(&checked)
}

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/utils/formatting#Decode>
pub fn decode_hex_with_checksum(d: &[u8]) -> io::Result<Vec<u8>> {
    let decoded = hex::decode(d)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("failed to decode hex ({e})")))?;
    let decoded_length = decoded.len();
    if decoded_length < CHECKSUM_LENGTH {
        return Err(Error::new(ErrorKind::InvalidInput, "input too short"));
    }

    let checksum = &decoded[decoded_length - CHECKSUM_LENGTH..];
    let orig = &decoded[..decoded_length - CHECKSUM_LENGTH];

    let orig_checksum = hash::sha256(orig);
    let orig_checksum_length = orig_checksum.len();
    let orig_checksum = &orig_checksum[orig_checksum_length - CHECKSUM_LENGTH..];
    if !cmp_manager::eq_vectors(checksum, orig_checksum) {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("invalid checksum {:?} != {:?}", checksum, orig_checksum),
        ));
    }

    Ok(orig.to_vec())
}

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/utils/formatting#FormatAddress>
pub fn address(chain_id_alias: &str, hrp: &str, d: &[u8]) -> io::Result<String> {
    if d.len() != 20 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("address payload must be 20-byte, got {}", d.len()),
        ));
    }

    let encoded = bech32::encode(hrp, d.to_base32(), Variant::Bech32)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("failed bech32::encode {e}")))?;
    Ok(format!("{}-{}", chain_id_alias, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RUST_LOG=debug cargo test --lib -- formatting::tests::test_encode_cb58_with_checksum --exact --show-output
    #[test]
    fn test_encode_cb58_with_checksum() {
        let d: Vec<u8> = Vec::new();
        let hashed = encode_cb58_with_checksum_string(&d);
        assert_eq!(hashed, "45PJLL");
        let decoded = decode_cb58_with_checksum(&hashed).unwrap();
        assert_eq!(d, decoded);

        let d: Vec<u8> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255];
        let hashed = encode_cb58_with_checksum_string(&d);
        assert_eq!(hashed, "1NVSVezva3bAtJesnUj");
        let decoded = decode_cb58_with_checksum(&hashed).unwrap();
        assert_eq!(d, decoded);
    }

    #[test]
    fn test_encode_hex_with_checksum() {
        let d: Vec<u8> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 255];
        let hashed = encode_hex_with_checksum(&d);
        assert_eq!(hashed, "00010203040506070809ff4482539c");
        let decoded = decode_hex_with_checksum(hashed.as_bytes()).unwrap();
        assert_eq!(d, decoded);
    }
}
