use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::LAUNCHPAD_SEED,
    error::LaunchpadError,
    events::PaymentsReleased,
    state::Launchpad,
    utils::transfer_from_vault,
};

#[derive(Accounts)]
pub struct ReleasePayments<'info> {
    pub operator: Signer<'info>,

    #[account(
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    pub payment_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub payment_vault: InterfaceAccount<'info, TokenAccount>,

    /// Operator's payment-token account
    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = operator,
        token::token_program = token_program
    )]
    pub operator_payment_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn release_payments(ctx: Context<ReleasePayments>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let launchpad = &ctx.accounts.launchpad;
    launchpad.ensure_operator(&ctx.accounts.operator.key())?;
    launchpad.ensure_ended(now)?;

    require_keys_eq!(
        ctx.accounts.payment_mint.key(),
        launchpad.payment_mint,
        LaunchpadError::InvalidMint
    );
    require_keys_eq!(
        ctx.accounts.payment_vault.key(),
        launchpad.payment_vault,
        LaunchpadError::InvalidVault
    );

    // Whole balance, including anything sent to the vault directly
    let amount = ctx.accounts.payment_vault.amount;

    let signer = launchpad.signer();
    let seeds = signer.seeds();
    transfer_from_vault(
        ctx.accounts.payment_vault.to_account_info(),
        ctx.accounts.operator_payment_account.to_account_info(),
        ctx.accounts.payment_mint.to_account_info(),
        ctx.accounts.launchpad.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        &[&seeds[..]],
        amount,
        ctx.accounts.payment_mint.decimals,
    )?;

    emit!(PaymentsReleased {
        launchpad: launchpad.key(),
        operator: launchpad.operator,
        amount,
        timestamp: now,
    });
    msg!("Released {} in payments to operator", amount);

    Ok(())
}
