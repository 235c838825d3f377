use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{LAUNCHPAD_SEED, PARTICIPANT_SEED},
    error::LaunchpadError,
    events::ClaimReleased,
    state::{Launchpad, Participant},
    utils::transfer_from_vault,
};

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct Release<'info> {
    #[account(
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    /// CHECK: Participant PDA of `beneficiary`, possibly never created;
    /// decoded by the handler.
    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, launchpad.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub participant: UncheckedAccount<'info>,

    pub launched_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub launched_vault: InterfaceAccount<'info, TokenAccount>,

    /// Beneficiary's launched-token account
    #[account(mut)]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// A release destination must be a launched-token account owned by the
/// beneficiary itself.
pub fn check_beneficiary_account(
    account: &TokenAccount,
    beneficiary: &Pubkey,
    launched_mint: &Pubkey,
) -> Result<()> {
    require_keys_eq!(account.owner, *beneficiary, LaunchpadError::InvalidBeneficiaryAccount);
    require_keys_eq!(account.mint, *launched_mint, LaunchpadError::InvalidBeneficiaryAccount);
    Ok(())
}

pub fn release(ctx: Context<Release>, beneficiary: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let launchpad = &ctx.accounts.launchpad;
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
    check_beneficiary_account(
        &ctx.accounts.beneficiary_token_account,
        &beneficiary,
        &launchpad.launched_mint,
    )?;

    let participant_info = ctx.accounts.participant.to_account_info();
    let mut participant =
        Participant::load(&participant_info)?.ok_or(LaunchpadError::NothingToRelease)?;

    // Zero the claim before the tokens leave the vault
    let amount = participant.take_claim()?;
    participant.store(&participant_info)?;

    let signer = launchpad.signer();
    let seeds = signer.seeds();
    transfer_from_vault(
        ctx.accounts.launched_vault.to_account_info(),
        ctx.accounts.beneficiary_token_account.to_account_info(),
        ctx.accounts.launched_mint.to_account_info(),
        ctx.accounts.launchpad.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        &[&seeds[..]],
        amount,
        ctx.accounts.launched_mint.decimals,
    )?;

    emit!(ClaimReleased {
        launchpad: launchpad.key(),
        beneficiary,
        amount,
        timestamp: now,
    });
    msg!("Released {} to {}", amount, beneficiary);

    Ok(())
}
