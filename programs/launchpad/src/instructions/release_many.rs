use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::LAUNCHPAD_SEED,
    error::LaunchpadError,
    events::ClaimReleased,
    instructions::check_beneficiary_account,
    state::{derive_participant_pda, Launchpad, Participant},
    utils::transfer_from_vault,
};

/// Remaining accounts: `(participant PDA, beneficiary token account)` for
/// every beneficiary, in order. The token account of a beneficiary with
/// nothing to release is not inspected.
#[derive(Accounts)]
pub struct ReleaseMany<'info> {
    #[account(
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    pub launched_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub launched_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn release_many<'info>(
    ctx: Context<'_, '_, '_, 'info, ReleaseMany<'info>>,
    beneficiaries: Vec<Pubkey>,
) -> Result<()> {
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
    require_eq!(
        ctx.remaining_accounts.len(),
        beneficiaries.len() * 2,
        LaunchpadError::InvalidRemainingAccounts
    );

    let launchpad_key = launchpad.key();
    let token_program = ctx.accounts.token_program.key();
    let signer = launchpad.signer();
    let seeds = signer.seeds();
    let mut released = 0usize;

    for (beneficiary, pair) in beneficiaries.iter().zip(ctx.remaining_accounts.chunks_exact(2)) {
        let participant_info = &pair[0];
        let destination_info = &pair[1];

        let (expected, _) = derive_participant_pda(&launchpad_key, beneficiary, &crate::ID);
        require_keys_eq!(
            participant_info.key(),
            expected,
            LaunchpadError::InvalidParticipantAccount
        );

        let mut participant = match Participant::load(participant_info)? {
            Some(participant) if participant.claim > 0 => participant,
            _ => {
                msg!("Nothing to release for {}", beneficiary);
                continue;
            }
        };

        // Destination only matters when tokens actually move
        require_keys_eq!(
            *destination_info.owner,
            token_program,
            LaunchpadError::InvalidBeneficiaryAccount
        );
        let destination = {
            let data = destination_info.try_borrow_data()?;
            TokenAccount::try_deserialize(&mut &data[..])?
        };
        check_beneficiary_account(&destination, beneficiary, &launchpad.launched_mint)?;

        let amount = participant.take_claim()?;
        participant.store(participant_info)?;

        transfer_from_vault(
            ctx.accounts.launched_vault.to_account_info(),
            destination_info.clone(),
            ctx.accounts.launched_mint.to_account_info(),
            ctx.accounts.launchpad.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            &[&seeds[..]],
            amount,
            ctx.accounts.launched_mint.decimals,
        )?;

        emit!(ClaimReleased {
            launchpad: launchpad_key,
            beneficiary: *beneficiary,
            amount,
            timestamp: now,
        });
        released += 1;
    }
    msg!("Released {} of {} claims", released, beneficiaries.len());

    Ok(())
}
