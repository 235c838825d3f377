use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::LAUNCHPAD_SEED,
    error::LaunchpadError,
    events::UnclaimedReleased,
    state::Launchpad,
    utils::transfer_from_vault,
};

#[derive(Accounts)]
pub struct ReleaseUnclaimed<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    pub launched_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub launched_vault: InterfaceAccount<'info, TokenAccount>,

    /// Operator's launched-token account
    #[account(
        mut,
        token::mint = launched_mint,
        token::authority = operator,
        token::token_program = token_program
    )]
    pub operator_launched_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn release_unclaimed(ctx: Context<ReleaseUnclaimed>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let launchpad = &mut ctx.accounts.launchpad;
    launchpad.ensure_operator(&ctx.accounts.operator.key())?;
    launchpad.ensure_ended(now)?;

    require_keys_eq!(
        ctx.accounts.launched_mint.key(),
        launchpad.launched_mint,
        LaunchpadError::InvalidMint
    );
    require_keys_eq!(
        ctx.accounts.launched_vault.key(),
        launchpad.launched_vault,
        LaunchpadError::InvalidVault
    );

    // Only the first sweep moves tokens; claims stay covered by the vault
    let amount = launchpad.take_unclaimed();
    launchpad.exit(&crate::ID)?;

    let signer = launchpad.signer();
    let seeds = signer.seeds();
    transfer_from_vault(
        ctx.accounts.launched_vault.to_account_info(),
        ctx.accounts.operator_launched_account.to_account_info(),
        ctx.accounts.launched_mint.to_account_info(),
        ctx.accounts.launchpad.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        &[&seeds[..]],
        amount,
        ctx.accounts.launched_mint.decimals,
    )?;

    let launchpad = &ctx.accounts.launchpad;
    emit!(UnclaimedReleased {
        launchpad: launchpad.key(),
        operator: launchpad.operator,
        amount,
        timestamp: now,
    });
    msg!("Released {} unclaimed tokens to operator", amount);

    Ok(())
}
