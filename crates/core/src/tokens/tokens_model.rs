use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Fixed four-way partition of all tokens.
///
/// Declaration order is the enumeration order used everywhere a per-category
/// list is produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Btc,
    EthBluechips,
    Stablecoins,
    DefiAltcoins,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Btc,
        Category::EthBluechips,
        Category::Stablecoins,
        Category::DefiAltcoins,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Btc => "BTC",
            Category::EthBluechips => "ETH_BLUECHIPS",
            Category::Stablecoins => "STABLECOINS",
            Category::DefiAltcoins => "DEFI_ALTCOINS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown category '{}'",
                    s
                )))
            })
    }
}

/// A tradable token with its latest market figures.
///
/// Only `current_price` (and the 24h change that travels with it) is
/// refreshed after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Market-data provider id (e.g. "bitcoin")
    pub id: String,
    /// Upper-case ticker
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub price_change_percentage_24h: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&Category::EthBluechips).unwrap();
        assert_eq!(json, "\"ETH_BLUECHIPS\"");

        let parsed: Category = serde_json::from_str("\"DEFI_ALTCOINS\"").unwrap();
        assert_eq!(parsed, Category::DefiAltcoins);
    }

    #[test]
    fn test_category_from_str_is_case_insensitive() {
        assert_eq!("btc".parse::<Category>().unwrap(), Category::Btc);
        assert_eq!(
            "Stablecoins".parse::<Category>().unwrap(),
            Category::Stablecoins
        );
        assert!("GOLD".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_order_matches_enumeration() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }
}
