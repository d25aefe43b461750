use sha2::{Digest, Sha256};

use crate::error::CodecError;

/// Encode `payload` with a leading version byte and a trailing 4-byte
/// double-SHA256 checksum, rendered in the Bitcoin base-58 alphabet.
///
/// Used for legacy addresses (`version` = P2PKH or P2SH magic byte) and
/// for WIF private keys (`version` = WIF prefix).
pub fn encode(version: u8, payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(payload.len() + 5);
    raw.push(version);
    raw.extend_from_slice(payload);
    let checksum = double_sha256_checksum(&raw);
    raw.extend_from_slice(&checksum);
    bs58::encode(raw).into_string()
}

/// Decode a Base58Check string back into its version byte and payload.
///
/// Fails with `CodecError::Alphabet` on characters outside the 58-symbol
/// alphabet and `CodecError::Checksum` when the trailing checksum does not
/// match (or the input is too short to carry version + checksum at all).
pub fn decode(s: &str) -> Result<(u8, Vec<u8>), CodecError> {
    let raw = bs58::decode(s).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { character, .. } => {
            CodecError::Alphabet { character }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => CodecError::Alphabet {
            character: s
                .as_bytes()
                .get(index)
                .copied()
                .map(char::from)
                .unwrap_or('\u{fffd}'),
        },
        _ => CodecError::Checksum,
    })?;

    // 1 version byte + 4 checksum bytes at minimum
    if raw.len() < 5 {
        return Err(CodecError::Checksum);
    }

    let (body, checksum) = raw.split_at(raw.len() - 4);
    if double_sha256_checksum(body) != checksum {
        return Err(CodecError::Checksum);
    }

    Ok((body[0], body[1..].to_vec()))
}

/// First 4 bytes of SHA256(SHA256(data)).
fn double_sha256_checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&second[..4]);
    checksum
}
