//! Bech32 address parsing, shared between node-ID and short-ID deserializers.

/// Converts a bech32-encoded AVAX address to its short address bytes (20-byte)
/// and the HRP it was encoded with. `chain_alias` is trimmed as a "X-"/"P-"
/// prefix when non-empty.
pub fn avax_address_to_short_bytes(
    chain_alias: &str,
    addr: &str,
) -> std::io::Result<(String, Vec<u8>)> {
    let trimmed = if chain_alias.is_empty() {
        addr.trim().to_string()
    } else {
        let pfx = if chain_alias.ends_with('-') {
            chain_alias.to_string()
        } else {
            format!("{}-", chain_alias)
        };
        addr.trim_start_matches(&pfx).to_string()
    };

    let (hrp, data, _) = bech32::decode(&trimmed).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::Other, format!("failed bech32::decode '{}'", e))
    })?;

    let convert = bech32::convert_bits(&data, 5, 8, false).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("failed bech32::convert_bits '{}'", e),
        )
    })?;
    Ok((hrp, convert))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::secp256k1::private_key;

    #[test]
    fn test_avax_address_to_short_bytes() {
        let pk = private_key::Key::generate().unwrap();
        let pubkey = pk.to_public_key();
        let short_addr = pubkey.to_short_bytes().unwrap();

        let p_avax_addr = pubkey.to_hrp_address(1, "P").unwrap();
        let (hrp, parsed_short_addr) = avax_address_to_short_bytes("P", &p_avax_addr).unwrap();
        assert_eq!(hrp, "avax");
        assert_eq!(parsed_short_addr, short_addr);
    }
}
