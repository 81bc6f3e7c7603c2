//! Data type definitions for the NFT Market

use odra::prelude::*;
use odra::casper_types::U512;

/// A unique asset tracked by the registry
#[odra::odra_type]
pub struct Asset {
    /// Unique identifier, assigned at mint and never reused
    pub asset_id: u64,
    /// Current holder; the contract itself while the asset is listed
    pub owner: Address,
    /// Metadata URI, set once at mint
    pub uri: String,
}

/// An offer to sell a specific asset at a fixed price
///
/// Valid only while the asset is held in escrow by the contract.
#[odra::odra_type]
pub struct Listing {
    /// ID of the listed asset
    pub asset_id: u64,
    /// Address that listed the asset and receives the sale proceeds
    pub seller: Address,
    /// Asking price in motes, always greater than zero
    pub price: U512,
}

impl Default for Listing {
    /// An empty slot: `price` is zero, so `seller` is never read.
    fn default() -> Self {
        Listing {
            asset_id: 0,
            seller: Address::Account(odra::casper_types::account::AccountHash::default()),
            price: U512::zero(),
        }
    }
}

/// Aggregate market counters
#[odra::odra_type]
#[derive(Default)]
pub struct MarketStats {
    /// Total number of assets minted
    pub asset_count: u64,
    /// Gross volume of completed sales in motes
    pub total_volume: U512,
    /// Current withdrawable fee balance
    pub fee_balance: U512,
}

/// Constants for fee calculation
pub mod constants {
    /// Seller share of each sale: 95% (numerator)
    pub const SELLER_SHARE_NUMERATOR: u64 = 95;
    /// Share denominator
    pub const SHARE_DENOMINATOR: u64 = 100;
}
