//! Coin parameters and the key/address derivation engine.
//!
//! A [`CoinProfile`] captures everything a coin's encodings depend on
//! (version bytes, segwit prefix, WIF prefix, extended-key headers, the
//! signature-hash flag), with testnet variants produced by a wholesale
//! field-override merge. The derivation engine in [`derive`] turns public
//! keys into legacy/segwit/CashAddr addresses and private keys into WIF
//! strings by sequencing the codecs in `addr-codec` against a profile.
//!
//! Everything here is a pure function over immutable inputs; a profile
//! built once can be shared across threads for the life of the process.

pub mod coins;
pub mod derive;
pub mod error;
pub mod keys;
pub mod profile;

// Re-export key public types for ergonomic imports.
pub use coins::{
    bitcoin, bitcoin_cash, counterparty, dash, dogecoin, litecoin, Coin, SIGHASH_ALL,
    SIGHASH_FORKID,
};
pub use derive::{
    hash160, legacy_to_cashaddr, priv_to_wif, pub_to_address, pub_to_native_address,
    script_to_address, wif_to_priv, AddressKind,
};
pub use error::KeyError;
pub use keys::{compress_pubkey, decompress_hex, decompress_pubkey, PrivateKey};
pub use profile::{CoinProfile, Network, ProfileOverrides};
