//! NFT Market - Main Contract Module
//!
//! This module implements the core marketplace functionality for
//! minting, listing, purchasing, and transferring unique assets
//! on Casper Network.

use odra::prelude::*;
use odra::casper_types::U512;

use crate::errors::Error;
use crate::events::{AssetSold, AssetTransition, FeesWithdrawn};
use crate::types::{constants::*, Asset, Listing, MarketStats};

/// Main marketplace contract module
#[odra::module(
    events = [AssetTransition, AssetSold, FeesWithdrawn],
    errors = Error
)]
pub struct NftMarket {
    // ============================================
    // Asset Registry
    // ============================================

    /// Mapping of asset ID to asset data
    assets: Mapping<u64, Asset>,
    /// Total number of assets minted (used for generating IDs)
    asset_count: Var<u64>,
    /// Number of assets currently held by each address
    holdings: Mapping<Address, u64>,

    // ============================================
    // Listing Ledger
    // ============================================

    /// Listing data per asset ID
    ///
    /// Mapping slots cannot be deleted, so a zero price marks an empty
    /// slot; only rows with a positive price are active listings.
    listings: Mapping<u64, Listing>,

    // ============================================
    // Fee Account
    // ============================================

    /// Accumulated protocol fees, withdrawable by the administrator
    fee_balance: Var<U512>,
    /// Administrator address (receives withdrawn fees)
    admin: Var<Address>,

    // ============================================
    // Market Stats
    // ============================================

    /// Gross volume of completed sales
    total_volume: Var<U512>,
}

#[odra::module]
impl NftMarket {
    // ============================================
    // Initialization
    // ============================================

    /// Initialize the market contract
    ///
    /// # Arguments
    /// * `admin` - Administrator address (receives protocol fees)
    pub fn init(&mut self, admin: Address) {
        self.admin.set(admin);
        self.asset_count.set(0);
        self.fee_balance.set(U512::zero());
        self.total_volume.set(U512::zero());
    }

    // ============================================
    // Asset Registry
    // ============================================

    /// Mint a new asset owned by the caller
    ///
    /// # Arguments
    /// * `uri` - Metadata URI, immutable after minting
    pub fn create(&mut self, uri: String) -> u64 {
        let caller = self.env().caller();

        // Generate new asset ID
        let count = self.asset_count.get_or_default();
        let asset_id = count + 1;
        self.asset_count.set(asset_id);

        let asset = Asset {
            asset_id,
            owner: caller,
            uri: uri.clone(),
        };
        self.assets.set(&asset_id, asset);

        let held = self.holdings.get_or_default(&caller);
        self.holdings.set(&caller, held + 1);

        self.env().emit_event(AssetTransition {
            asset_id,
            to: caller,
            uri,
            price: U512::zero(),
        });

        asset_id
    }

    /// Get the current holder of an asset
    pub fn owner_of(&self, asset_id: u64) -> Address {
        self.load_asset(asset_id).owner
    }

    /// Get the metadata URI of an asset
    pub fn uri_of(&self, asset_id: u64) -> String {
        self.load_asset(asset_id).uri
    }

    /// Transfer a non-listed asset to another address
    ///
    /// A listed asset is held by the contract, so its seller cannot
    /// transfer it without cancelling the listing first.
    pub fn transfer(&mut self, asset_id: u64, to: Address) {
        let caller = self.env().caller();
        let asset = self.load_asset(asset_id);

        if asset.owner != caller {
            self.env().revert(Error::NotAssetOwner);
        }

        self.move_custody(asset_id, to);

        self.env().emit_event(AssetTransition {
            asset_id,
            to,
            uri: String::new(),
            price: U512::zero(),
        });
    }

    // ============================================
    // Listing Lifecycle
    // ============================================

    /// List an asset for sale at a fixed price
    ///
    /// Custody of the asset moves into escrow until the listing is
    /// bought or cancelled.
    ///
    /// # Arguments
    /// * `asset_id` - ID of the asset to list
    /// * `price` - Asking price in motes, must be greater than zero
    pub fn list(&mut self, asset_id: u64, price: U512) {
        let caller = self.env().caller();
        let asset = self.load_asset(asset_id);

        if asset.owner != caller {
            self.env().revert(Error::NotAssetOwner);
        }
        if price == U512::zero() {
            self.env().revert(Error::NullPrice);
        }

        let custodian = self.env().self_address();
        self.move_custody(asset_id, custodian);
        self.listings.set(
            &asset_id,
            Listing {
                asset_id,
                seller: caller,
                price,
            },
        );

        self.env().emit_event(AssetTransition {
            asset_id,
            to: custodian,
            uri: String::new(),
            price,
        });
    }

    /// Cancel an active listing and return the asset to its seller
    pub fn cancel_listing(&mut self, asset_id: u64) {
        let caller = self.env().caller();
        let listing = self.load_listing(asset_id);

        if listing.seller != caller {
            self.env().revert(Error::NotAssetOwner);
        }

        self.move_custody(asset_id, listing.seller);
        // Mark the listing slot as empty
        self.listings.set(&asset_id, Listing::default());

        self.env().emit_event(AssetTransition {
            asset_id,
            to: listing.seller,
            uri: String::new(),
            price: U512::zero(),
        });
    }

    /// Buy a listed asset at its exact asking price
    ///
    /// The attached payment must equal the listing price; both under-
    /// and overpayment are rejected. The seller receives 95% of the
    /// price, the remainder accrues to the fee balance.
    #[odra(payable)]
    pub fn buy(&mut self, asset_id: u64) {
        let caller = self.env().caller();
        let attached_value = self.env().attached_value();

        let listing = self.load_listing(asset_id);
        if attached_value != listing.price {
            self.env().revert(Error::IncorrectPrice);
        }

        let seller_share = listing.price * SELLER_SHARE_NUMERATOR / SHARE_DENOMINATOR;
        let fee = listing.price - seller_share;

        // Finalize custody, listing removal, fees and stats before any
        // funds leave the contract (CEI pattern)
        self.move_custody(asset_id, caller);
        self.listings.set(&asset_id, Listing::default());
        let fee_balance = self.fee_balance.get_or_default() + fee;
        self.fee_balance.set(fee_balance);
        let total_volume = self.total_volume.get_or_default() + listing.price;
        self.total_volume.set(total_volume);

        // Pay out the seller's share
        self.env().transfer_tokens(&listing.seller, &seller_share);

        self.env().emit_event(AssetTransition {
            asset_id,
            to: caller,
            uri: String::new(),
            price: U512::zero(),
        });
        self.env().emit_event(AssetSold {
            asset_id,
            buyer: caller,
            seller: listing.seller,
            price: listing.price,
            fee,
            timestamp: self.env().get_block_time(),
        });
    }

    // ============================================
    // Fee Account
    // ============================================

    /// Withdraw the full accumulated fee balance to the administrator
    pub fn withdraw_funds(&mut self) {
        let caller = self.env().caller();
        let admin = self.load_admin();

        if caller != admin {
            self.env().revert(Error::Unauthorized);
        }

        let amount = self.fee_balance.get_or_default();
        if amount == U512::zero() {
            self.env().revert(Error::NoFundsToWithdraw);
        }

        // Reset balance before transfer (CEI pattern)
        self.fee_balance.set(U512::zero());
        self.env().transfer_tokens(&admin, &amount);

        self.env().emit_event(FeesWithdrawn {
            admin,
            amount,
            timestamp: self.env().get_block_time(),
        });
    }

    /// Hand the administrator role to another address (only admin)
    pub fn transfer_admin(&mut self, new_admin: Address) {
        let caller = self.env().caller();
        let admin = self.load_admin();

        if caller != admin {
            self.env().revert(Error::Unauthorized);
        }
        self.admin.set(new_admin);
    }

    // ============================================
    // View Functions
    // ============================================

    /// Get an asset by ID
    pub fn get_asset(&self, asset_id: u64) -> Option<Asset> {
        self.assets.get(&asset_id)
    }

    /// Get the active listing for an asset, if any
    pub fn get_listing(&self, asset_id: u64) -> Option<Listing> {
        self.listings
            .get(&asset_id)
            .filter(|listing| listing.price > U512::zero())
    }

    /// Number of assets currently held by an address
    pub fn balance_of(&self, owner: Address) -> u64 {
        self.holdings.get_or_default(&owner)
    }

    /// Total number of assets minted
    pub fn get_asset_count(&self) -> u64 {
        self.asset_count.get_or_default()
    }

    /// Current withdrawable fee balance
    pub fn get_fee_balance(&self) -> U512 {
        self.fee_balance.get_or_default()
    }

    /// Get the administrator address
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    /// Get aggregate market counters
    pub fn get_stats(&self) -> MarketStats {
        MarketStats {
            asset_count: self.asset_count.get_or_default(),
            total_volume: self.total_volume.get_or_default(),
            fee_balance: self.fee_balance.get_or_default(),
        }
    }

    // ============================================
    // Internal Functions
    // ============================================

    /// Load an asset or revert with `NotFound`
    fn load_asset(&self, asset_id: u64) -> Asset {
        self.assets
            .get(&asset_id)
            .unwrap_or_else(|| self.env().revert(Error::NotFound))
    }

    /// Load the active listing for an asset or revert with `NotFound`
    fn load_listing(&self, asset_id: u64) -> Listing {
        let listing = self.listings.get(&asset_id).unwrap_or_default();
        if listing.price == U512::zero() {
            self.env().revert(Error::NotFound);
        }
        listing
    }

    /// Load the administrator address
    fn load_admin(&self) -> Address {
        self.admin
            .get()
            .unwrap_or_else(|| self.env().revert(Error::Unauthorized))
    }

    /// Move custody of an asset and keep per-holder counts in sync
    fn move_custody(&mut self, asset_id: u64, to: Address) {
        let mut asset = self.load_asset(asset_id);
        let from = asset.owner;
        asset.owner = to;
        self.assets.set(&asset_id, asset);

        let from_held = self.holdings.get_or_default(&from);
        self.holdings.set(&from, from_held - 1);
        let to_held = self.holdings.get_or_default(&to);
        self.holdings.set(&to, to_held + 1);
    }
}

// ============================================
// Tests
// ============================================
