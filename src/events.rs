//! Event definitions for the NFT Market
//!
//! Events are emitted for important state changes and can be
//! indexed by off-chain services.

use odra::prelude::*;
use odra::casper_types::U512;

/// Emitted once per asset state change: mint, listing, sale,
/// cancellation, or direct transfer.
///
/// `uri` is non-empty only on mint; `price` is non-zero only when the
/// asset enters a listing.
#[odra::event]
pub struct AssetTransition {
    /// Unique identifier of the asset
    pub asset_id: u64,
    /// Address now holding the asset (the contract itself while listed)
    pub to: Address,
    /// Metadata URI on mint, empty otherwise
    pub uri: String,
    /// Listing price when the asset is listed, zero otherwise
    pub price: U512,
}

/// Emitted when a listed asset is sold
#[odra::event]
pub struct AssetSold {
    /// Unique identifier of the asset
    pub asset_id: u64,
    /// Address of the buyer
    pub buyer: Address,
    /// Address of the seller
    pub seller: Address,
    /// Total price paid
    pub price: U512,
    /// Protocol fee deducted from the price
    pub fee: U512,
    /// Timestamp of the sale
    pub timestamp: u64,
}

/// Emitted when the administrator drains the accumulated fees
#[odra::event]
pub struct FeesWithdrawn {
    /// Address of the administrator
    pub admin: Address,
    /// Amount withdrawn in motes
    pub amount: U512,
    /// Timestamp of the withdrawal
    pub timestamp: u64,
}
