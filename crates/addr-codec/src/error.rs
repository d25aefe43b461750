use thiserror::Error;

/// Codec-level failures shared by the Base58Check, Bech32 and CashAddr
/// encodings.
///
/// Every malformed input maps to exactly one of these kinds so callers can
/// tell bad data apart from unsupported features.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("character {character:?} is not in the encoding alphabet")]
    Alphabet { character: char },

    #[error("checksum verification failed")]
    Checksum,

    #[error("wrong human-readable prefix: expected {expected:?}, found {found:?}")]
    InvalidHrp { expected: String, found: String },

    #[error("invalid padding bits in 5-bit data")]
    Padding,

    #[error("witness version {0} cannot be represented in the bech32 charset")]
    WitnessVersion(u8),
}
