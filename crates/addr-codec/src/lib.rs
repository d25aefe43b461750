//! Checksummed text codecs for coin addresses and serialized keys.
//!
//! Three encodings share this crate: Base58Check (legacy addresses, WIF),
//! BIP-173 bech32 (native segwit), and CashAddr. They are pure functions
//! over byte slices; no coin parameters live here, only the version
//! bytes and prefixes the caller passes in.

pub mod base58check;
pub mod bech32;
pub mod cashaddr;
pub mod error;

mod bits;

// Re-export key public types for ergonomic imports.
pub use cashaddr::CashKind;
pub use error::CodecError;
