use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{LAUNCHPAD_SEED, PARTICIPANT_SEED},
    error::LaunchpadError,
    events::Purchased,
    state::{Launchpad, Participant},
    utils::pull_with_allowance,
};

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct Purchase<'info> {
    /// Funds the purchase; need not be the beneficiary
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    /// CHECK: Participant PDA of `beneficiary`. It may not exist, in which case
    /// the beneficiary is not whitelisted; decoded by the handler.
    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, launchpad.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub participant: UncheckedAccount<'info>,

    pub payment_mint: InterfaceAccount<'info, Mint>,

    /// Payer's payment-token account, with the launchpad approved as delegate
    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = payer,
        token::token_program = token_program
    )]
    pub payer_payment_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub payment_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn purchase(ctx: Context<Purchase>, beneficiary: Pubkey, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let launchpad = &ctx.accounts.launchpad;
    launchpad.ensure_open(now)?;

    let participant_info = ctx.accounts.participant.to_account_info();
    let mut participant = match Participant::load(&participant_info)? {
        Some(participant) if participant.whitelisted => participant,
        _ => return err!(LaunchpadError::NotWhitelisted),
    };

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

    let cost = launchpad.cost_of(amount)?;
    let signer = launchpad.signer();
    let seeds = signer.seeds();
    pull_with_allowance(
        ctx.accounts.payer_payment_account.to_account_info(),
        ctx.accounts.payment_vault.to_account_info(),
        ctx.accounts.payment_mint.to_account_info(),
        ctx.accounts.launchpad.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        &[&seeds[..]],
        cost,
        ctx.accounts.payment_mint.decimals,
    )?;

    // Capacity is enforced after the pull; a rejection reverts the transfer
    let launchpad = &mut ctx.accounts.launchpad;
    launchpad.record_purchase(&mut participant, amount)?;
    participant.store(&participant_info)?;

    emit!(Purchased {
        launchpad: launchpad.key(),
        payer: ctx.accounts.payer.key(),
        beneficiary,
        amount,
        cost,
        claim: participant.claim,
        total_claimed: launchpad.total_claimed,
        timestamp: now,
    });
    msg!(
        "Purchase of {} for {} paid {}, {}/{} claimed",
        amount,
        beneficiary,
        cost,
        launchpad.total_claimed,
        launchpad.total_claimable
    );

    Ok(())
}
