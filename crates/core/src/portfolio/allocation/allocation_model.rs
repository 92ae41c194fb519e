use serde::{Deserialize, Serialize};

use crate::tokens::Category;

/// Percentage per category.
///
/// Values are not normalised: a computed allocation may sum to slightly off
/// 100 and that drift is kept as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Allocation {
    #[serde(rename = "BTC", default)]
    pub btc: f64,
    #[serde(rename = "ETH_BLUECHIPS", default)]
    pub eth_bluechips: f64,
    #[serde(rename = "STABLECOINS", default)]
    pub stablecoins: f64,
    #[serde(rename = "DEFI_ALTCOINS", default)]
    pub defi_altcoins: f64,
}

impl Allocation {
    pub const fn new(btc: f64, eth_bluechips: f64, stablecoins: f64, defi_altcoins: f64) -> Self {
        Allocation {
            btc,
            eth_bluechips,
            stablecoins,
            defi_altcoins,
        }
    }

    pub const fn uniform(pct: f64) -> Self {
        Allocation::new(pct, pct, pct, pct)
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Btc => self.btc,
            Category::EthBluechips => self.eth_bluechips,
            Category::Stablecoins => self.stablecoins,
            Category::DefiAltcoins => self.defi_altcoins,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Btc => &mut self.btc,
            Category::EthBluechips => &mut self.eth_bluechips,
            Category::Stablecoins => &mut self.stablecoins,
            Category::DefiAltcoins => &mut self.defi_altcoins,
        }
    }

    /// (category, percentage) pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, pct)| pct).sum()
    }

    /// Every category multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Allocation::new(
            self.btc * factor,
            self.eth_bluechips * factor,
            self.stablecoins * factor,
            self.defi_altcoins * factor,
        )
    }
}
