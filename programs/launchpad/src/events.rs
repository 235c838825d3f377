//! Event definitions

use anchor_lang::prelude::*;

/// Event emitted when an operator creates a new launchpad
#[event]
pub struct LaunchpadCreated {
    pub launchpad: Pubkey,
    pub operator: Pubkey,
    pub seed: u64,
}

/// Event emitted when the launchpad binds its mints and snapshots the deposit
#[event]
pub struct LaunchpadInitialized {
    pub launchpad: Pubkey,
    pub launched_mint: Pubkey,
    pub payment_mint: Pubkey,
    pub total_claimable: u64,
    pub timestamp: i64,
}

#[event]
pub struct SaleStarted {
    pub launchpad: Pubkey,
    pub end_time: i64,
    pub price: u128,
    pub timestamp: i64,
}

#[event]
pub struct WhitelistUpdated {
    pub launchpad: Pubkey,
    pub address: Pubkey,
    pub whitelisted: bool,
}

/// Event emitted when a purchase accrues a claim
#[event]
pub struct Purchased {
    pub launchpad: Pubkey,
    pub payer: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub cost: u64,
    /// Beneficiary claim after this purchase
    pub claim: u64,
    pub total_claimed: u64,
    pub timestamp: i64,
}

#[event]
pub struct ClaimReleased {
    pub launchpad: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PaymentsReleased {
    pub launchpad: Pubkey,
    pub operator: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct UnclaimedReleased {
    pub launchpad: Pubkey,
    pub operator: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
