#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("LaunchPad1111111111111111111111111111111111");

#[program]
pub mod launchpad {
    use super::*;

    pub fn create_launchpad(ctx: Context<CreateLaunchpad>, seed: u64) -> Result<()> {
        instructions::create_launchpad(ctx, seed)
    }

    // Lifecycle
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn start(ctx: Context<Start>, end_time: i64, price: u128) -> Result<()> {
        instructions::start(ctx, end_time, price)
    }

    // Whitelist
    pub fn set_whitelist(ctx: Context<SetWhitelist>, address: Pubkey, whitelisted: bool) -> Result<()> {
        instructions::set_whitelist(ctx, address, whitelisted)
    }

    pub fn set_whitelist_many<'info>(
        ctx: Context<'_, '_, '_, 'info, SetWhitelistMany<'info>>,
        addresses: Vec<Pubkey>,
        whitelisted: bool,
    ) -> Result<()> {
        instructions::set_whitelist_many(ctx, addresses, whitelisted)
    }

    // Sale
    pub fn purchase(ctx: Context<Purchase>, beneficiary: Pubkey, amount: u64) -> Result<()> {
        instructions::purchase(ctx, beneficiary, amount)
    }

    // Settlement
    pub fn release(ctx: Context<Release>, beneficiary: Pubkey) -> Result<()> {
        instructions::release(ctx, beneficiary)
    }

    pub fn release_many<'info>(
        ctx: Context<'_, '_, '_, 'info, ReleaseMany<'info>>,
        beneficiaries: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::release_many(ctx, beneficiaries)
    }

    pub fn release_payments(ctx: Context<ReleasePayments>) -> Result<()> {
        instructions::release_payments(ctx)
    }

    pub fn release_unclaimed(ctx: Context<ReleaseUnclaimed>) -> Result<()> {
        instructions::release_unclaimed(ctx)
    }
}
