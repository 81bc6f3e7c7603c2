//! Error definitions for the NFT Market

use odra::prelude::*;

/// Custom errors for the NFT Market contract
#[odra::odra_error]
pub enum Error {
    /// Listing price must be greater than zero
    NullPrice = 1,
    /// Unknown asset id, or no active listing for the asset
    NotFound = 2,
    /// Attached payment does not match the listing price exactly
    IncorrectPrice = 3,
    /// Caller has no authority over this asset or listing
    NotAssetOwner = 4,
    /// Caller is not the administrator
    Unauthorized = 5,
    /// Fee balance is empty, nothing to withdraw
    NoFundsToWithdraw = 6,
}
