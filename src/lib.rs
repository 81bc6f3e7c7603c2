//! NFT Market - Fixed-Price Marketplace for Unique Assets on Casper Network
//!
//! This contract allows users to:
//! - Mint unique assets with immutable metadata URIs
//! - List assets for sale, with the contract holding custody in escrow
//! - Purchase listed assets, with an automatic protocol fee cut
//! - Withdraw accumulated protocol fees (administrator only)
//!
//! Built with Odra framework for Casper Network.

#![cfg_attr(target_arch = "wasm32", no_std)]
#![cfg_attr(target_arch = "wasm32", no_main)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod types;
pub mod nft_market;

pub use nft_market::NftMarket;
