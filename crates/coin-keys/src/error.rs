use addr_codec::CodecError;
use thiserror::Error;

/// Key and address derivation errors.
///
/// Codec failures pass through unchanged so callers see the precise
/// encoding-level kind; the variants added here cover the key-material
/// and profile-capability checks the codecs know nothing about.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("x coordinate is not a point on the secp256k1 curve")]
    InvalidPoint,

    #[error("address kind {kind} is not supported by {coin}")]
    UnsupportedAddressKind { kind: &'static str, coin: &'static str },

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
