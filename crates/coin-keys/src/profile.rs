use serde::{Deserialize, Serialize};

/// Network a profile is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn is_testnet(self) -> bool {
        matches!(self, Network::Testnet)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Immutable parameter record for one coin on one network.
///
/// Built once at coin-selection time and passed by reference to every
/// codec call afterwards; nothing here is mutated post-construction.
#[derive(Debug, Clone, Serialize)]
pub struct CoinProfile {
    pub coin_symbol: &'static str,
    pub display_name: &'static str,
    /// Version byte for legacy P2PKH addresses.
    pub magicbyte: u8,
    /// Version byte for P2SH-wrapped addresses.
    pub script_magicbyte: u8,
    /// Version byte for serialized private keys.
    pub wif_prefix: u8,
    pub segwit_supported: bool,
    /// Human-readable prefix for native segwit, e.g. "bc" / "tb".
    pub segwit_hrp: &'static str,
    /// Whether addresses are derived from the compressed public key.
    pub use_compressed_addr: bool,
    /// BIP-44 purpose/coin-type constant for the external HD component.
    pub hd_path: u32,
    /// Signature-hash flag the coin's transactions use.
    pub hashcode: u32,
    /// Set iff the coin's native display format is CashAddr.
    pub cashaddr_prefix: Option<&'static str>,
    /// Extended-private-key version integers per address-type tag.
    pub xprv_headers: &'static [(&'static str, u32)],
    /// Extended-public-key version integers per address-type tag.
    pub xpub_headers: &'static [(&'static str, u32)],
}

/// Partial profile used for testnet parameter sets.
///
/// Every `Some` field replaces the base field wholesale; in particular
/// the header tables are swapped as whole slices, never merged entry by
/// entry. An override table that drops a tag drops it for real.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileOverrides {
    pub coin_symbol: Option<&'static str>,
    pub display_name: Option<&'static str>,
    pub magicbyte: Option<u8>,
    pub script_magicbyte: Option<u8>,
    pub wif_prefix: Option<u8>,
    pub segwit_supported: Option<bool>,
    pub segwit_hrp: Option<&'static str>,
    pub use_compressed_addr: Option<bool>,
    pub hd_path: Option<u32>,
    pub hashcode: Option<u32>,
    pub cashaddr_prefix: Option<&'static str>,
    pub xprv_headers: Option<&'static [(&'static str, u32)]>,
    pub xpub_headers: Option<&'static [(&'static str, u32)]>,
}

impl CoinProfile {
    /// Apply a testnet override record, producing the effective profile.
    pub fn with_overrides(self, o: &ProfileOverrides) -> CoinProfile {
        CoinProfile {
            coin_symbol: o.coin_symbol.unwrap_or(self.coin_symbol),
            display_name: o.display_name.unwrap_or(self.display_name),
            magicbyte: o.magicbyte.unwrap_or(self.magicbyte),
            script_magicbyte: o.script_magicbyte.unwrap_or(self.script_magicbyte),
            wif_prefix: o.wif_prefix.unwrap_or(self.wif_prefix),
            segwit_supported: o.segwit_supported.unwrap_or(self.segwit_supported),
            segwit_hrp: o.segwit_hrp.unwrap_or(self.segwit_hrp),
            use_compressed_addr: o.use_compressed_addr.unwrap_or(self.use_compressed_addr),
            hd_path: o.hd_path.unwrap_or(self.hd_path),
            hashcode: o.hashcode.unwrap_or(self.hashcode),
            cashaddr_prefix: o.cashaddr_prefix.or(self.cashaddr_prefix),
            xprv_headers: o.xprv_headers.unwrap_or(self.xprv_headers),
            xpub_headers: o.xpub_headers.unwrap_or(self.xpub_headers),
        }
    }

    /// Extended-private-key version for an address-type tag ("p2pkh", …).
    pub fn xprv_header(&self, tag: &str) -> Option<u32> {
        self.xprv_headers
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, v)| *v)
    }

    /// Extended-public-key version for an address-type tag.
    pub fn xpub_header(&self, tag: &str) -> Option<u32> {
        self.xpub_headers
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, v)| *v)
    }
}
