//! BIP-173 bech32 encoding of native segwit addresses.
//!
//! Only witness version 0 with a 20-byte program is ever produced by the
//! derivation engine, but the decoder accepts any version and program
//! length the 5-bit regrouping admits.

use crate::bits::convert_bits;
use crate::error::CodecError;

const CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Encode a segwit witness program as `hrp + '1' + base32(data + checksum)`.
pub fn encode_segwit(
    hrp: &str,
    witness_version: u8,
    program: &[u8],
) -> Result<String, CodecError> {
    if witness_version >= 32 {
        return Err(CodecError::WitnessVersion(witness_version));
    }

    let mut data = vec![witness_version];
    data.extend(convert_bits(program, 8, 5, true)?);

    let checksum = create_checksum(hrp, &data);
    data.extend_from_slice(&checksum);

    let mut out = String::with_capacity(hrp.len() + 1 + data.len());
    out.push_str(hrp);
    out.push('1');
    for value in data {
        out.push(char::from(CHARSET[value as usize]));
    }
    Ok(out)
}

/// Decode a segwit address, validating the human-readable prefix against
/// `expected_hrp` and the BCH checksum. Returns the witness version and
/// the regrouped witness program.
pub fn decode_segwit(expected_hrp: &str, s: &str) -> Result<(u8, Vec<u8>), CodecError> {
    // the whole string must be single-case
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(CodecError::InvalidHrp {
            expected: expected_hrp.to_ascii_lowercase(),
            found: s.to_string(),
        });
    }
    let s = s.to_ascii_lowercase();

    let sep = match s.rfind('1') {
        Some(pos) if pos >= 1 => pos,
        _ => {
            return Err(CodecError::InvalidHrp {
                expected: expected_hrp.to_ascii_lowercase(),
                found: s,
            })
        }
    };
    let (hrp, rest) = s.split_at(sep);
    let rest = &rest[1..];

    if hrp != expected_hrp.to_ascii_lowercase() {
        return Err(CodecError::InvalidHrp {
            expected: expected_hrp.to_ascii_lowercase(),
            found: hrp.to_string(),
        });
    }

    let mut values = Vec::with_capacity(rest.len());
    for c in rest.chars() {
        match CHARSET.iter().position(|&b| char::from(b) == c) {
            Some(v) => values.push(v as u8),
            None => return Err(CodecError::Alphabet { character: c }),
        }
    }

    // 6 checksum digits plus at least the witness-version digit
    if values.len() < 7 {
        return Err(CodecError::Checksum);
    }
    if !verify_checksum(hrp, &values) {
        return Err(CodecError::Checksum);
    }

    let data = &values[..values.len() - 6];
    let witness_version = data[0];
    let program = convert_bits(&data[1..], 5, 8, false)?;
    Ok((witness_version, program))
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let b = chk >> 25;
        chk = (chk & 0x01ff_ffff) << 5 ^ u32::from(v);
        for (i, &gen) in GENERATOR.iter().enumerate() {
            if (b >> i) & 1 != 0 {
                chk ^= gen;
            }
        }
    }
    chk
}

/// `[c >> 5 for c in hrp] + [0] + [c & 31 for c in hrp]`
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(hrp.len() * 2 + 1);
    out.extend(hrp.bytes().map(|b| b >> 5));
    out.push(0);
    out.extend(hrp.bytes().map(|b| b & 31));
    out
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; 6] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; 6]);
    let pm = polymod(&values) ^ 1;
    let mut checksum = [0u8; 6];
    for (i, digit) in checksum.iter_mut().enumerate() {
        *digit = ((pm >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

fn verify_checksum(hrp: &str, values: &[u8]) -> bool {
    let mut expanded = hrp_expand(hrp);
    expanded.extend_from_slice(values);
    polymod(&expanded) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // hash160 of the compressed pubkey for private key 1; the canonical
    // P2WPKH example address.
    const PROGRAM_HEX: &str = "751e76e8199196d454941c45d1b3a323f1433bd6";
    const MAINNET_ADDR: &str = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";

    fn program() -> Vec<u8> {
        hex::decode(PROGRAM_HEX).unwrap()
    }

    #[test]
    fn encode_known_mainnet_vector() {
        let addr = encode_segwit("bc", 0, &program()).unwrap();
        assert_eq!(addr, MAINNET_ADDR);
    }

    #[test]
    fn decode_known_mainnet_vector() {
        let (version, prog) = decode_segwit("bc", MAINNET_ADDR).unwrap();
        assert_eq!(version, 0);
        assert_eq!(prog, program());
    }

    #[test]
    fn uppercase_input_accepted() {
        let upper = MAINNET_ADDR.to_ascii_uppercase();
        let (version, prog) = decode_segwit("bc", &upper).unwrap();
        assert_eq!(version, 0);
        assert_eq!(prog, program());
    }

    #[test]
    fn mixed_case_rejected() {
        let mut mixed = MAINNET_ADDR.to_string();
        mixed.replace_range(..1, "B");
        match decode_segwit("bc", &mixed) {
            Err(CodecError::InvalidHrp { .. }) => {}
            other => panic!("expected hrp error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_hrp_rejected() {
        match decode_segwit("tb", MAINNET_ADDR) {
            Err(CodecError::InvalidHrp { expected, found }) => {
                assert_eq!(expected, "tb");
                assert_eq!(found, "bc");
            }
            other => panic!("expected hrp error, got {other:?}"),
        }
    }

    #[test]
    fn missing_separator_rejected() {
        assert!(matches!(
            decode_segwit("bc", "bcqw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"),
            Err(CodecError::InvalidHrp { .. })
        ));
    }

    #[test]
    fn invalid_charset_character_rejected() {
        // 'b' appears in the hrp but is not a data charset symbol
        let bad = format!("bc1b{}", &MAINNET_ADDR[4..]);
        match decode_segwit("bc", &bad) {
            Err(CodecError::Alphabet { character }) => assert_eq!(character, 'b'),
            other => panic!("expected alphabet error, got {other:?}"),
        }
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let mut s = MAINNET_ADDR.to_string();
        s.pop();
        s.push('5');
        assert_eq!(decode_segwit("bc", &s), Err(CodecError::Checksum));
    }

    #[test]
    fn roundtrip_other_versions_and_lengths() {
        // the encoder side is permissive about what the decoder must accept
        for (version, len) in [(0u8, 20usize), (0, 32), (1, 32), (16, 40)] {
            let prog: Vec<u8> = (0..len as u8).collect();
            let addr = encode_segwit("tb", version, &prog).unwrap();
            assert_eq!(decode_segwit("tb", &addr).unwrap(), (version, prog));
        }
    }

    #[test]
    fn witness_version_out_of_charset_rejected() {
        assert_eq!(
            encode_segwit("bc", 32, &program()),
            Err(CodecError::WitnessVersion(32))
        );
    }

    #[test]
    fn random_single_char_flips_fail() {
        const DATA_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
        let mut rng = rand::thread_rng();
        let mut failures = 0;
        let mut attempts = 0;
        for _ in 0..200 {
            let mut chars: Vec<u8> = MAINNET_ADDR.bytes().collect();
            // flip only data-part characters; hrp flips are a different error
            let pos = rng.gen_range(3..chars.len());
            let replacement = DATA_CHARSET[rng.gen_range(0..DATA_CHARSET.len())];
            if chars[pos] == replacement {
                continue;
            }
            chars[pos] = replacement;
            attempts += 1;
            let mutated = String::from_utf8(chars).unwrap();
            if decode_segwit("bc", &mutated).is_err() {
                failures += 1;
            }
        }
        // bech32 guarantees detection of any single-character substitution
        assert_eq!(failures, attempts);
    }
}
