//! The address/key derivation engine.
//!
//! Sequences the codecs according to a [`CoinProfile`]; every codec-level
//! failure propagates unchanged, the engine only adds the capability
//! checks a profile implies.

use addr_codec::{base58check, bech32, cashaddr, CashKind};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::KeyError;
use crate::keys::{validate_pubkey_encoding, PrivateKey};
use crate::profile::CoinProfile;

/// Address encodings a coin may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    Legacy,
    Segwit,
    CashAddr,
}

impl AddressKind {
    fn as_str(self) -> &'static str {
        match self {
            AddressKind::Legacy => "legacy",
            AddressKind::Segwit => "segwit",
            AddressKind::CashAddr => "cashaddr",
        }
    }
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HASH160: RIPEMD-160(SHA-256(data)).
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripemd = Ripemd160::digest(sha);
    ripemd.into()
}

/// Derive an address of the requested kind from a public key.
///
/// Requesting `Segwit` on a coin without segwit support, or `CashAddr`
/// on a coin without a CashAddr prefix, fails with
/// [`KeyError::UnsupportedAddressKind`].
pub fn pub_to_address(
    pubkey: &[u8],
    profile: &CoinProfile,
    kind: AddressKind,
) -> Result<String, KeyError> {
    validate_pubkey_encoding(pubkey)?;
    let hash = hash160(pubkey);

    match kind {
        AddressKind::Legacy => Ok(base58check::encode(profile.magicbyte, &hash)),
        AddressKind::Segwit => {
            if !profile.segwit_supported {
                return Err(KeyError::UnsupportedAddressKind {
                    kind: kind.as_str(),
                    coin: profile.coin_symbol,
                });
            }
            Ok(bech32::encode_segwit(profile.segwit_hrp, 0, &hash)?)
        }
        AddressKind::CashAddr => {
            let prefix = profile.cashaddr_prefix.ok_or(KeyError::UnsupportedAddressKind {
                kind: kind.as_str(),
                coin: profile.coin_symbol,
            })?;
            // Round-trip through the legacy form first: re-decoding
            // normalizes the (version, hash) pair before re-encoding.
            let legacy = base58check::encode(profile.magicbyte, &hash);
            let (_, hash) = base58check::decode(&legacy)?;
            Ok(cashaddr::encode(prefix, CashKind::P2pkh, &hash, false)?)
        }
    }
}

/// Derive the coin's native display address: CashAddr for CashAddr-native
/// coins, the legacy base58 form otherwise.
pub fn pub_to_native_address(pubkey: &[u8], profile: &CoinProfile) -> Result<String, KeyError> {
    let kind = if profile.cashaddr_prefix.is_some() {
        AddressKind::CashAddr
    } else {
        AddressKind::Legacy
    };
    pub_to_address(pubkey, profile, kind)
}

/// Re-encode an existing legacy base58 address in CashAddr form.
///
/// P2PKH and P2SH version bytes are mapped through the profile; the
/// checksum of the legacy form is verified by the decode step.
pub fn legacy_to_cashaddr(
    address: &str,
    profile: &CoinProfile,
    omit_prefix: bool,
) -> Result<String, KeyError> {
    let prefix = profile.cashaddr_prefix.ok_or(KeyError::UnsupportedAddressKind {
        kind: AddressKind::CashAddr.as_str(),
        coin: profile.coin_symbol,
    })?;
    let (version, hash) = base58check::decode(address)?;
    let kind = if version == profile.magicbyte {
        CashKind::P2pkh
    } else if version == profile.script_magicbyte {
        CashKind::P2sh
    } else {
        return Err(KeyError::InvalidAddress(format!(
            "version byte {version} belongs to neither P2PKH nor P2SH on {}",
            profile.coin_symbol
        )));
    };
    Ok(cashaddr::encode(prefix, kind, &hash, omit_prefix)?)
}

/// P2SH address for a redeem script.
pub fn script_to_address(script: &[u8], profile: &CoinProfile) -> String {
    let hash = hash160(script);
    base58check::encode(profile.script_magicbyte, &hash)
}

/// Serialize a private key scalar in Wallet Import Format.
///
/// A `0x01` marker byte is appended when the key maps to a compressed
/// public key.
pub fn priv_to_wif(key: &[u8; 32], profile: &CoinProfile, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(33);
    payload.extend_from_slice(key);
    if compressed {
        payload.push(0x01);
    }
    base58check::encode(profile.wif_prefix, &payload)
}

/// Decode a WIF string back into the raw scalar and compression flag.
///
/// The version byte is returned to the caller untouched inside the
/// profile-independent [`PrivateKey`]; payload lengths other than 32 or
/// 33-with-marker are rejected.
pub fn wif_to_priv(wif: &str) -> Result<PrivateKey, KeyError> {
    let (_, payload) = base58check::decode(wif)?;
    let (bytes, compressed) = match payload.len() {
        32 => (&payload[..], false),
        33 if payload[32] == 0x01 => (&payload[..32], true),
        33 => {
            return Err(KeyError::InvalidPrivateKey(
                "33-byte payload without a 0x01 compression marker".into(),
            ))
        }
        len => {
            return Err(KeyError::InvalidPrivateKey(format!(
                "expected a 32-byte scalar, got {len} bytes"
            )))
        }
    };
    let mut key = [0u8; 32];
    key.copy_from_slice(bytes);
    Ok(PrivateKey::new(key, compressed))
}
