//! Per-coin parameter sets.
//!
//! Each coin is a constructor function that starts from its mainnet
//! record and applies the testnet override record when asked, following
//! the present-field-replaces-wholesale rule of
//! [`CoinProfile::with_overrides`]. Coin-specific quirks (the Bitcoin
//! Cash legacy derivation path) are explicit post-merge adjustments, not
//! part of the generic merge.

use serde::{Deserialize, Serialize};

use crate::profile::{CoinProfile, Network, ProfileOverrides};

/// Base signature-hash flag shared by all supported coins.
pub const SIGHASH_ALL: u32 = 0x01;
/// Fork-id bit OR'd into the sighash flag on Bitcoin Cash.
pub const SIGHASH_FORKID: u32 = 0x40;

// BIP-32 extended-key version integers, per address-type tag.
const BTC_XPRV_HEADERS: &[(&str, u32)] = &[
    ("p2pkh", 0x0488ade4),
    ("p2wpkh-p2sh", 0x049d7878),
    ("p2wsh-p2sh", 0x0295b005),
    ("p2wpkh", 0x04b2430c),
    ("p2wsh", 0x02aa7a99),
];
const BTC_XPUB_HEADERS: &[(&str, u32)] = &[
    ("p2pkh", 0x0488b21e),
    ("p2wpkh-p2sh", 0x049d7cb2),
    ("p2wsh-p2sh", 0x0295b43f),
    ("p2wpkh", 0x04b24746),
    ("p2wsh", 0x02aa7ed3),
];
const TESTNET_XPRV_HEADERS: &[(&str, u32)] = &[
    ("p2pkh", 0x04358394),
    ("p2wpkh-p2sh", 0x044a4e28),
    ("p2wsh-p2sh", 0x0295b005),
    ("p2wpkh", 0x04358394),
    ("p2wsh", 0x02aa7a99),
];
const TESTNET_XPUB_HEADERS: &[(&str, u32)] = &[
    ("p2pkh", 0x043587cf),
    ("p2wpkh-p2sh", 0x044a5262),
    ("p2wsh-p2sh", 0x0295b43f),
    ("p2wpkh", 0x043587cf),
    ("p2wsh", 0x02aa7ed3),
];
// Coins without published segwit-style headers only carry p2pkh testnet
// versions.
const TESTNET_P2PKH_XPRV: &[(&str, u32)] = &[("p2pkh", 0x04358394)];
const TESTNET_P2PKH_XPUB: &[(&str, u32)] = &[("p2pkh", 0x043587cf)];

/// Supported coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    Bitcoin,
    Litecoin,
    Dogecoin,
    Dash,
    BitcoinCash,
    Counterparty,
}

impl Coin {
    /// Build the effective profile for this coin on `network`.
    pub fn profile(self, network: Network) -> CoinProfile {
        match self {
            Coin::Bitcoin => bitcoin(network),
            Coin::Litecoin => litecoin(network),
            Coin::Dogecoin => dogecoin(network),
            Coin::Dash => dash(network),
            Coin::BitcoinCash => bitcoin_cash(network, false),
            Coin::Counterparty => counterparty(network),
        }
    }

    /// Look a coin up by its mainnet ticker symbol.
    pub fn from_symbol(symbol: &str) -> Option<Coin> {
        match symbol {
            "BTC" => Some(Coin::Bitcoin),
            "LTC" => Some(Coin::Litecoin),
            "DOGE" => Some(Coin::Dogecoin),
            "DASH" => Some(Coin::Dash),
            "BCH" => Some(Coin::BitcoinCash),
            "XCP" => Some(Coin::Counterparty),
            _ => None,
        }
    }

    pub fn all() -> &'static [Coin] {
        &[
            Coin::Bitcoin,
            Coin::Litecoin,
            Coin::Dogecoin,
            Coin::Dash,
            Coin::BitcoinCash,
            Coin::Counterparty,
        ]
    }
}

pub fn bitcoin(network: Network) -> CoinProfile {
    let base = CoinProfile {
        coin_symbol: "BTC",
        display_name: "Bitcoin",
        magicbyte: 0,
        script_magicbyte: 5,
        wif_prefix: 0x80,
        segwit_supported: true,
        segwit_hrp: "bc",
        use_compressed_addr: true,
        hd_path: 0,
        hashcode: SIGHASH_ALL,
        cashaddr_prefix: None,
        xprv_headers: BTC_XPRV_HEADERS,
        xpub_headers: BTC_XPUB_HEADERS,
    };
    match network {
        Network::Mainnet => base,
        Network::Testnet => base.with_overrides(&ProfileOverrides {
            coin_symbol: Some("BTCTEST"),
            display_name: Some("Bitcoin Testnet"),
            magicbyte: Some(111),
            script_magicbyte: Some(196),
            wif_prefix: Some(0xef),
            segwit_hrp: Some("tb"),
            hd_path: Some(1),
            xprv_headers: Some(TESTNET_XPRV_HEADERS),
            xpub_headers: Some(TESTNET_XPUB_HEADERS),
            ..Default::default()
        }),
    }
}

pub fn litecoin(network: Network) -> CoinProfile {
    let base = CoinProfile {
        coin_symbol: "LTC",
        display_name: "Litecoin",
        magicbyte: 48,
        script_magicbyte: 50,
        wif_prefix: 0xb0,
        segwit_supported: true,
        segwit_hrp: "ltc",
        use_compressed_addr: true,
        hd_path: 2,
        hashcode: SIGHASH_ALL,
        cashaddr_prefix: None,
        xprv_headers: BTC_XPRV_HEADERS,
        xpub_headers: BTC_XPUB_HEADERS,
    };
    match network {
        Network::Mainnet => base,
        Network::Testnet => base.with_overrides(&ProfileOverrides {
            coin_symbol: Some("LTCTEST"),
            display_name: Some("Litecoin Testnet"),
            magicbyte: Some(111),
            script_magicbyte: Some(58),
            // the reference client reuses the Bitcoin testnet secret-key
            // prefix, not mainnet's 0xb0
            wif_prefix: Some(0xef),
            segwit_hrp: Some("tltc"),
            hd_path: Some(1),
            xprv_headers: Some(TESTNET_P2PKH_XPRV),
            xpub_headers: Some(TESTNET_P2PKH_XPUB),
            ..Default::default()
        }),
    }
}

pub fn dogecoin(network: Network) -> CoinProfile {
    let base = CoinProfile {
        coin_symbol: "DOGE",
        display_name: "Dogecoin",
        magicbyte: 30,
        script_magicbyte: 22,
        wif_prefix: 0x9e,
        segwit_supported: false,
        segwit_hrp: "",
        use_compressed_addr: true,
        hd_path: 3,
        hashcode: SIGHASH_ALL,
        cashaddr_prefix: None,
        xprv_headers: BTC_XPRV_HEADERS,
        xpub_headers: BTC_XPUB_HEADERS,
    };
    match network {
        Network::Mainnet => base,
        Network::Testnet => base.with_overrides(&ProfileOverrides {
            coin_symbol: Some("DOGETEST"),
            display_name: Some("Dogecoin Testnet"),
            magicbyte: Some(113),
            script_magicbyte: Some(196),
            wif_prefix: Some(0xf1),
            hd_path: Some(1),
            xprv_headers: Some(TESTNET_P2PKH_XPRV),
            xpub_headers: Some(TESTNET_P2PKH_XPUB),
            ..Default::default()
        }),
    }
}

pub fn dash(network: Network) -> CoinProfile {
    let base = CoinProfile {
        coin_symbol: "DASH",
        display_name: "Dash",
        magicbyte: 76,
        script_magicbyte: 16,
        wif_prefix: 0xcc,
        segwit_supported: false,
        segwit_hrp: "",
        use_compressed_addr: true,
        hd_path: 5,
        hashcode: SIGHASH_ALL,
        cashaddr_prefix: None,
        xprv_headers: BTC_XPRV_HEADERS,
        xpub_headers: BTC_XPUB_HEADERS,
    };
    match network {
        Network::Mainnet => base,
        Network::Testnet => base.with_overrides(&ProfileOverrides {
            coin_symbol: Some("DASHTEST"),
            display_name: Some("Dash Testnet"),
            magicbyte: Some(140),
            script_magicbyte: Some(19),
            hd_path: Some(1),
            xprv_headers: Some(TESTNET_P2PKH_XPRV),
            xpub_headers: Some(TESTNET_P2PKH_XPUB),
            ..Default::default()
        }),
    }
}

/// Bitcoin Cash keeps Bitcoin's byte parameters but displays CashAddr
/// natively and signs with the fork-id bit.
///
/// `legacy` selects the pre-BIP44-split derivation scheme some older
/// wallets still use; combined with testnet it forces `hd_path` back to
/// 0. That adjustment happens after the generic merge on purpose: it
/// depends on both flags at once and belongs to this coin alone.
pub fn bitcoin_cash(network: Network, legacy: bool) -> CoinProfile {
    let base = CoinProfile {
        coin_symbol: "BCH",
        display_name: "Bitcoin Cash",
        magicbyte: 0,
        script_magicbyte: 5,
        wif_prefix: 0x80,
        segwit_supported: false,
        segwit_hrp: "",
        use_compressed_addr: true,
        hd_path: 145,
        hashcode: SIGHASH_ALL | SIGHASH_FORKID,
        cashaddr_prefix: Some("bitcoincash"),
        xprv_headers: BTC_XPRV_HEADERS,
        xpub_headers: BTC_XPUB_HEADERS,
    };
    let mut profile = match network {
        Network::Mainnet => base,
        Network::Testnet => base.with_overrides(&ProfileOverrides {
            coin_symbol: Some("BCHTEST"),
            display_name: Some("Bitcoin Cash Testnet"),
            magicbyte: Some(111),
            script_magicbyte: Some(196),
            wif_prefix: Some(0xef),
            hd_path: Some(1),
            cashaddr_prefix: Some("bchtest"),
            xprv_headers: Some(TESTNET_P2PKH_XPRV),
            xpub_headers: Some(TESTNET_P2PKH_XPUB),
            ..Default::default()
        }),
    };
    if legacy && network.is_testnet() {
        profile.hd_path = 0;
    }
    profile
}

/// Counterparty rides on Bitcoin's parameters but never uses segwit.
pub fn counterparty(network: Network) -> CoinProfile {
    let base = CoinProfile {
        coin_symbol: "XCP",
        display_name: "Counterparty",
        magicbyte: 0,
        script_magicbyte: 5,
        wif_prefix: 0x80,
        segwit_supported: false,
        segwit_hrp: "bc",
        use_compressed_addr: true,
        hd_path: 0,
        hashcode: SIGHASH_ALL,
        cashaddr_prefix: None,
        xprv_headers: BTC_XPRV_HEADERS,
        xpub_headers: BTC_XPUB_HEADERS,
    };
    match network {
        Network::Mainnet => base,
        Network::Testnet => base.with_overrides(&ProfileOverrides {
            coin_symbol: Some("XCPTEST"),
            display_name: Some("Counterparty Testnet"),
            magicbyte: Some(111),
            script_magicbyte: Some(196),
            wif_prefix: Some(0xef),
            segwit_hrp: Some("tb"),
            hd_path: Some(1),
            xprv_headers: Some(TESTNET_XPRV_HEADERS),
            xpub_headers: Some(TESTNET_XPUB_HEADERS),
            ..Default::default()
        }),
    }
}
