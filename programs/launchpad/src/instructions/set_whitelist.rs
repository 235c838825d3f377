use anchor_lang::prelude::*;

use crate::{
    constants::{LAUNCHPAD_SEED, PARTICIPANT_SEED},
    events::WhitelistUpdated,
    state::{Launchpad, Participant},
};

#[derive(Accounts)]
#[instruction(address: Pubkey)]
pub struct SetWhitelist<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    /// Participant record of `address`, created on first whitelisting
    #[account(
        init_if_needed,
        payer = operator,
        space = Participant::LEN,
        seeds = [PARTICIPANT_SEED, launchpad.key().as_ref(), address.as_ref()],
        bump
    )]
    pub participant: Account<'info, Participant>,

    pub system_program: Program<'info, System>,
}

pub fn set_whitelist(ctx: Context<SetWhitelist>, address: Pubkey, whitelisted: bool) -> Result<()> {
    let launchpad = &ctx.accounts.launchpad;
    launchpad.ensure_operator(&ctx.accounts.operator.key())?;

    let participant = &mut ctx.accounts.participant;
    if participant.is_initialized() {
        participant.whitelisted = whitelisted;
    } else {
        participant.set_inner(Participant::new(
            launchpad.key(),
            address,
            whitelisted,
            ctx.bumps.participant,
        ));
    }

    emit!(WhitelistUpdated {
        launchpad: launchpad.key(),
        address,
        whitelisted,
    });
    msg!("Whitelist {} = {}", address, whitelisted);

    Ok(())
}
