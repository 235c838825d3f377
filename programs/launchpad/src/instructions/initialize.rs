use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{constants::LAUNCHPAD_SEED, events::LaunchpadInitialized, state::Launchpad};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Launchpad operator, pays for any missing vault
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    /// Token being distributed
    #[account(mint::token_program = launched_token_program)]
    pub launched_mint: InterfaceAccount<'info, Mint>,

    /// Token accepted as payment
    #[account(mint::token_program = payment_token_program)]
    pub payment_mint: InterfaceAccount<'info, Mint>,

    /// Launchpad's launched-token vault, funded by the operator beforehand
    #[account(
        init_if_needed,
        payer = operator,
        associated_token::mint = launched_mint,
        associated_token::authority = launchpad,
        associated_token::token_program = launched_token_program
    )]
    pub launched_vault: InterfaceAccount<'info, TokenAccount>,

    /// Launchpad's payment-token vault
    #[account(
        init_if_needed,
        payer = operator,
        associated_token::mint = payment_mint,
        associated_token::authority = launchpad,
        associated_token::token_program = payment_token_program
    )]
    pub payment_vault: InterfaceAccount<'info, TokenAccount>,

    pub launched_token_program: Interface<'info, TokenInterface>,
    pub payment_token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let launchpad = &mut ctx.accounts.launchpad;
    launchpad.ensure_operator(&ctx.accounts.operator.key())?;

    // Snapshot of what the operator deposited before this call
    let deposited = ctx.accounts.launched_vault.amount;

    launchpad.initialize(
        ctx.accounts.launched_mint.key(),
        ctx.accounts.payment_mint.key(),
        ctx.accounts.launched_vault.key(),
        ctx.accounts.payment_vault.key(),
        deposited,
    )?;

    emit!(LaunchpadInitialized {
        launchpad: launchpad.key(),
        launched_mint: launchpad.launched_mint,
        payment_mint: launchpad.payment_mint,
        total_claimable: launchpad.total_claimable,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!(
        "Initialized launchpad {} with {} claimable tokens",
        launchpad.key(),
        launchpad.total_claimable
    );

    Ok(())
}
