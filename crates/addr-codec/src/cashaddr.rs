//! CashAddr base-32 address format.
//!
//! Same 5-bit charset as bech32 but a different checksum: a 40-bit polymod
//! over five generators, a low-5-bits prefix expansion, and 8 checksum
//! digits instead of 6. The payload packs a type/size version byte in
//! front of the hash.

use crate::bits::convert_bits;
use crate::error::CodecError;

const CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Hash sizes representable by the 3 size bits of the version byte.
const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// Payload kind carried by a CashAddr string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashKind {
    /// Pay-to-pubkey-hash (type bits 0).
    P2pkh,
    /// Pay-to-script-hash (type bits 1, version byte 0x08).
    P2sh,
}

impl CashKind {
    fn type_bits(self) -> u8 {
        match self {
            CashKind::P2pkh => 0x00,
            CashKind::P2sh => 0x08,
        }
    }
}

/// Encode a hash as a CashAddr string.
///
/// The checksum always covers `prefix`; `omit_prefix` only drops the
/// `prefix:` part from the rendered string (some wallets display the
/// default network prefix implicitly). Nothing is ever stripped unless
/// the caller asks for it.
pub fn encode(
    prefix: &str,
    kind: CashKind,
    hash: &[u8],
    omit_prefix: bool,
) -> Result<String, CodecError> {
    let size_bits = HASH_SIZES
        .iter()
        .position(|&len| len == hash.len())
        .ok_or(CodecError::Padding)? as u8;
    let version_byte = kind.type_bits() | size_bits;

    let mut raw = Vec::with_capacity(hash.len() + 1);
    raw.push(version_byte);
    raw.extend_from_slice(hash);
    let mut payload = convert_bits(&raw, 8, 5, true)?;

    let checksum = create_checksum(prefix, &payload);
    payload.extend_from_slice(&checksum);

    let mut out = String::with_capacity(prefix.len() + 1 + payload.len());
    if !omit_prefix {
        out.push_str(prefix);
        out.push(':');
    }
    for value in payload {
        out.push(char::from(CHARSET[value as usize]));
    }
    Ok(out)
}

/// Decode a CashAddr string into its kind and hash bytes.
///
/// The prefix part is optional in the input; when present it must match
/// `expected_prefix`, and either way the checksum is verified against
/// `expected_prefix`.
pub fn decode(expected_prefix: &str, s: &str) -> Result<(CashKind, Vec<u8>), CodecError> {
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(CodecError::InvalidHrp {
            expected: expected_prefix.to_ascii_lowercase(),
            found: s.to_string(),
        });
    }
    let s = s.to_ascii_lowercase();
    let expected = expected_prefix.to_ascii_lowercase();

    let data_part = match s.split_once(':') {
        Some((prefix, rest)) => {
            if prefix != expected {
                return Err(CodecError::InvalidHrp {
                    expected,
                    found: prefix.to_string(),
                });
            }
            rest
        }
        None => s.as_str(),
    };

    let mut values = Vec::with_capacity(data_part.len());
    for c in data_part.chars() {
        match CHARSET.iter().position(|&b| char::from(b) == c) {
            Some(v) => values.push(v as u8),
            None => return Err(CodecError::Alphabet { character: c }),
        }
    }

    // 8 checksum digits plus at least one payload digit
    if values.len() < 9 {
        return Err(CodecError::Checksum);
    }
    let mut checked = expand_prefix(&expected);
    checked.extend_from_slice(&values);
    if polymod(&checked) != 1 {
        return Err(CodecError::Checksum);
    }

    let raw = convert_bits(&values[..values.len() - 8], 5, 8, false)?;
    if raw.is_empty() {
        return Err(CodecError::Padding);
    }
    let version_byte = raw[0];
    let hash = raw[1..].to_vec();

    // bit 7 of the version byte is reserved and must be zero
    if version_byte & 0x80 != 0 {
        return Err(CodecError::Padding);
    }
    let kind = match version_byte & 0x78 {
        0x00 => CashKind::P2pkh,
        0x08 => CashKind::P2sh,
        _ => return Err(CodecError::Padding),
    };
    if HASH_SIZES[(version_byte & 0x07) as usize] != hash.len() {
        return Err(CodecError::Padding);
    }

    Ok((kind, hash))
}

/// `[c & 31 for c in prefix] + [0]`: lower 5 bits only, unlike bech32.
fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut out: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    out.push(0);
    out
}

fn create_checksum(prefix: &str, payload: &[u8]) -> [u8; 8] {
    let mut values = expand_prefix(prefix);
    values.extend_from_slice(payload);
    values.extend_from_slice(&[0; 8]);
    let pm = polymod(&values) ^ 1;
    let mut checksum = [0u8; 8];
    for (i, digit) in checksum.iter_mut().enumerate() {
        *digit = ((pm >> (5 * (7 - i))) & 0x1f) as u8;
    }
    checksum
}

fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &v in values {
        let c0 = c >> 35;
        c = ((c & 0x07_ffff_ffff) << 5) ^ u64::from(v);
        for (i, &gen) in GENERATOR.iter().enumerate() {
            if (c0 >> i) & 1 != 0 {
                c ^= gen;
            }
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // Published 20-byte P2PKH test vector for the cashaddr format.
    const P2PKH_HASH_HEX: &str = "f5bf48b397dae70be82b3cca4793f8eb2b6cdac9";
    const P2PKH_ADDR: &str = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";

    fn p2pkh_hash() -> Vec<u8> {
        hex::decode(P2PKH_HASH_HEX).unwrap()
    }

    #[test]
    fn encode_known_vector() {
        let addr = encode("bitcoincash", CashKind::P2pkh, &p2pkh_hash(), false).unwrap();
        assert_eq!(addr, P2PKH_ADDR);
    }

    #[test]
    fn decode_known_vector() {
        let (kind, hash) = decode("bitcoincash", P2PKH_ADDR).unwrap();
        assert_eq!(kind, CashKind::P2pkh);
        assert_eq!(hash, p2pkh_hash());
    }

    #[test]
    fn decode_without_prefix_part() {
        let bare = P2PKH_ADDR.split_once(':').unwrap().1;
        let (kind, hash) = decode("bitcoincash", bare).unwrap();
        assert_eq!(kind, CashKind::P2pkh);
        assert_eq!(hash, p2pkh_hash());
    }

    #[test]
    fn omit_prefix_drops_only_the_display_prefix() {
        let full = encode("bitcoincash", CashKind::P2pkh, &p2pkh_hash(), false).unwrap();
        let bare = encode("bitcoincash", CashKind::P2pkh, &p2pkh_hash(), true).unwrap();
        assert_eq!(full, format!("bitcoincash:{bare}"));
        // checksum still binds the prefix: the bare form only decodes
        // against the prefix it was encoded for
        assert!(decode("bitcoincash", &bare).is_ok());
        assert_eq!(decode("bchtest", &bare), Err(CodecError::Checksum));
    }

    #[test]
    fn p2sh_roundtrip() {
        let hash = [0x11u8; 20];
        let addr = encode("bitcoincash", CashKind::P2sh, &hash, false).unwrap();
        assert_eq!(decode("bitcoincash", &addr).unwrap(), (CashKind::P2sh, hash.to_vec()));
    }

    #[test]
    fn larger_hash_sizes_roundtrip() {
        for len in [24usize, 32, 64] {
            let hash: Vec<u8> = (0..len as u8).collect();
            let addr = encode("bchtest", CashKind::P2pkh, &hash, false).unwrap();
            assert_eq!(decode("bchtest", &addr).unwrap(), (CashKind::P2pkh, hash));
        }
    }

    #[test]
    fn unsupported_hash_size_rejected() {
        assert_eq!(
            encode("bitcoincash", CashKind::P2pkh, &[0u8; 21], false),
            Err(CodecError::Padding)
        );
    }

    #[test]
    fn wrong_prefix_rejected() {
        match decode("bchtest", P2PKH_ADDR) {
            Err(CodecError::InvalidHrp { expected, found }) => {
                assert_eq!(expected, "bchtest");
                assert_eq!(found, "bitcoincash");
            }
            other => panic!("expected hrp error, got {other:?}"),
        }
    }

    #[test]
    fn mixed_case_rejected() {
        let mut mixed = P2PKH_ADDR.to_string();
        mixed.replace_range(..1, "B");
        assert!(matches!(
            decode("bitcoincash", &mixed),
            Err(CodecError::InvalidHrp { .. })
        ));
    }

    #[test]
    fn invalid_character_rejected() {
        let bad = P2PKH_ADDR.replace('q', "b");
        match decode("bitcoincash", &bad) {
            Err(CodecError::Alphabet { character }) => assert_eq!(character, 'b'),
            other => panic!("expected alphabet error, got {other:?}"),
        }
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let mut s = P2PKH_ADDR.to_string();
        s.pop();
        s.push('3');
        assert_eq!(decode("bitcoincash", &s), Err(CodecError::Checksum));
    }

    #[test]
    fn random_single_char_flips_fail() {
        const DATA_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
        let data_start = P2PKH_ADDR.find(':').unwrap() + 1;
        let mut rng = rand::thread_rng();
        let mut failures = 0;
        let mut attempts = 0;
        for _ in 0..200 {
            let mut chars: Vec<u8> = P2PKH_ADDR.bytes().collect();
            let pos = rng.gen_range(data_start..chars.len());
            let replacement = DATA_CHARSET[rng.gen_range(0..DATA_CHARSET.len())];
            if chars[pos] == replacement {
                continue;
            }
            chars[pos] = replacement;
            attempts += 1;
            let mutated = String::from_utf8(chars).unwrap();
            if decode("bitcoincash", &mutated).is_err() {
                failures += 1;
            }
        }
        // the 40-bit polymod detects any single-character substitution
        assert_eq!(failures, attempts);
    }
}
