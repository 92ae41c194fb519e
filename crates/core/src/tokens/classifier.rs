//! Static token → category classification.
//!
//! Rules are checked in order and the first match wins:
//! 1. Bitcoin
//! 2. Ethereum and the large caps (BNB, ADA, SOL, DOT)
//! 3. Stablecoins
//! 4. Everything else is DeFi/altcoin

use super::Category;

/// Large caps grouped with Ethereum, as (accepted ids, ticker) pairs.
/// Only the large caps accept their lowercase ticker as an id.
const BLUECHIPS: &[(&[&str], &str)] = &[
    (&["ethereum"], "ETH"),
    (&["binancecoin", "bnb"], "BNB"),
    (&["cardano", "ada"], "ADA"),
    (&["solana", "sol"], "SOL"),
    (&["polkadot", "dot"], "DOT"),
];

const STABLECOIN_IDS: &[&str] = &["usd-coin", "tether", "dai", "busd", "true-usd", "frax"];

const STABLECOIN_SYMBOLS: &[&str] = &["USDC", "USDT", "DAI", "BUSD", "TUSD", "FRAX"];

/// Maps a token to its category. Case-insensitive on both id and symbol;
/// never fails.
pub fn classify(id: &str, symbol: &str) -> Category {
    let id_lower = id.to_lowercase();
    let symbol_upper = symbol.to_uppercase();

    if id_lower == "bitcoin" || symbol_upper == "BTC" {
        return Category::Btc;
    }

    let is_bluechip = BLUECHIPS
        .iter()
        .any(|(ids, ticker)| ids.contains(&id_lower.as_str()) || symbol_upper == *ticker);
    if is_bluechip {
        return Category::EthBluechips;
    }

    if STABLECOIN_IDS.contains(&id_lower.as_str())
        || STABLECOIN_SYMBOLS.contains(&symbol_upper.as_str())
    {
        return Category::Stablecoins;
    }

    Category::DefiAltcoins
}
