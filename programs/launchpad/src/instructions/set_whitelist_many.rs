use anchor_lang::prelude::*;

use crate::{
    constants::{LAUNCHPAD_SEED, PARTICIPANT_SEED},
    error::LaunchpadError,
    events::WhitelistUpdated,
    state::{derive_participant_pda, Launchpad, Participant},
};

/// Remaining accounts: the participant PDA of every address, in order.
#[derive(Accounts)]
pub struct SetWhitelistMany<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    pub system_program: Program<'info, System>,
}

pub fn set_whitelist_many<'info>(
    ctx: Context<'_, '_, '_, 'info, SetWhitelistMany<'info>>,
    addresses: Vec<Pubkey>,
    whitelisted: bool,
) -> Result<()> {
    let launchpad = &ctx.accounts.launchpad;
    launchpad.ensure_operator(&ctx.accounts.operator.key())?;
    require_eq!(
        ctx.remaining_accounts.len(),
        addresses.len(),
        LaunchpadError::InvalidRemainingAccounts
    );

    let launchpad_key = launchpad.key();
    for (address, info) in addresses.iter().zip(ctx.remaining_accounts.iter()) {
        let (expected, bump) = derive_participant_pda(&launchpad_key, address, &crate::ID);
        require_keys_eq!(info.key(), expected, LaunchpadError::InvalidParticipantAccount);
        require!(info.is_writable, LaunchpadError::InvalidParticipantAccount);

        let participant = match Participant::load(info)? {
            Some(mut participant) => {
                participant.whitelisted = whitelisted;
                participant
            }
            None => {
                let bump_bytes = [bump];
                let seeds: [&[u8]; 4] = [
                    PARTICIPANT_SEED,
                    launchpad_key.as_ref(),
                    address.as_ref(),
                    &bump_bytes,
                ];
                Participant::create_account(
                    ctx.accounts.operator.to_account_info(),
                    info.clone(),
                    ctx.accounts.system_program.to_account_info(),
                    &seeds,
                )?;
                Participant::new(launchpad_key, *address, whitelisted, bump)
            }
        };
        participant.store(info)?;

        emit!(WhitelistUpdated {
            launchpad: launchpad_key,
            address: *address,
            whitelisted,
        });
    }
    msg!("Whitelist {} addresses = {}", addresses.len(), whitelisted);

    Ok(())
}
