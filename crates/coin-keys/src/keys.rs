//! Key material types and secp256k1 point (de)compression.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey as Secp256k1Point;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KeyError;

/// A raw 32-byte private-key scalar plus its compression flag.
///
/// The scalar is zeroed when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; 32],
    #[zeroize(skip)]
    compressed: bool,
}

impl PrivateKey {
    pub fn new(bytes: [u8; 32], compressed: bool) -> Self {
        Self { bytes, compressed }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Whether the corresponding public key is serialized compressed.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }
}

impl std::fmt::Debug for PrivateKey {
    // never print the scalar
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bytes", &"[redacted]")
            .field("compressed", &self.compressed)
            .finish()
    }
}

/// Check that `pubkey` is a well-formed SEC1 encoding: 33 bytes with an
/// 0x02/0x03 prefix, or 65 bytes with an 0x04 prefix.
pub fn validate_pubkey_encoding(pubkey: &[u8]) -> Result<(), KeyError> {
    match (pubkey.len(), pubkey.first()) {
        (33, Some(0x02 | 0x03)) | (65, Some(0x04)) => Ok(()),
        (33, Some(prefix)) | (65, Some(prefix)) => Err(KeyError::InvalidPublicKey(format!(
            "unexpected prefix byte 0x{prefix:02x}"
        ))),
        (len, _) => Err(KeyError::InvalidPublicKey(format!(
            "expected 33 or 65 bytes, got {len}"
        ))),
    }
}

/// Recover the full uncompressed point from a 33-byte compressed key.
///
/// The curve equation solve (square root of `x^3 + 7` and parity
/// selection) happens inside the SEC1 parser; an x-coordinate that is
/// not on the curve fails with [`KeyError::InvalidPoint`].
pub fn decompress_pubkey(compressed: &[u8]) -> Result<[u8; 65], KeyError> {
    if compressed.len() != 33 || !matches!(compressed[0], 0x02 | 0x03) {
        return Err(KeyError::InvalidPublicKey(
            "expected a 33-byte compressed key with an 0x02/0x03 prefix".into(),
        ));
    }
    let point = Secp256k1Point::from_sec1_bytes(compressed).map_err(|_| KeyError::InvalidPoint)?;
    let encoded = point.to_encoded_point(false);
    let mut out = [0u8; 65];
    out.copy_from_slice(encoded.as_bytes());
    Ok(out)
}

/// Compress a 65-byte uncompressed key down to its 33-byte form.
pub fn compress_pubkey(uncompressed: &[u8]) -> Result<[u8; 33], KeyError> {
    if uncompressed.len() != 65 || uncompressed[0] != 0x04 {
        return Err(KeyError::InvalidPublicKey(
            "expected a 65-byte uncompressed key with an 0x04 prefix".into(),
        ));
    }
    let point =
        Secp256k1Point::from_sec1_bytes(uncompressed).map_err(|_| KeyError::InvalidPoint)?;
    let encoded = point.to_encoded_point(true);
    let mut out = [0u8; 33];
    out.copy_from_slice(encoded.as_bytes());
    Ok(out)
}

/// Hex-string convenience wrapper around [`decompress_pubkey`].
pub fn decompress_hex(compressed_hex: &str) -> Result<String, KeyError> {
    let bytes = hex::decode(compressed_hex)
        .map_err(|e| KeyError::InvalidPublicKey(format!("invalid hex: {e}")))?;
    let uncompressed = decompress_pubkey(&bytes)?;
    Ok(hex::encode(uncompressed))
}
