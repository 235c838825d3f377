use anchor_lang::prelude::*;

use crate::{constants::LAUNCHPAD_SEED, events::LaunchpadCreated, state::Launchpad};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct CreateLaunchpad<'info> {
    #[account(
        init,
        payer = operator,
        space = Launchpad::LEN,
        seeds = [LAUNCHPAD_SEED, operator.key().as_ref(), &seed.to_le_bytes()],
        bump
    )]
    pub launchpad: Account<'info, Launchpad>,

    /// Becomes the launchpad operator
    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_launchpad(ctx: Context<CreateLaunchpad>, seed: u64) -> Result<()> {
    let operator = ctx.accounts.operator.key();
    ctx.accounts
        .launchpad
        .set_inner(Launchpad::new(operator, seed, ctx.bumps.launchpad));

    emit!(LaunchpadCreated {
        launchpad: ctx.accounts.launchpad.key(),
        operator,
        seed,
    });
    msg!("Created launchpad {} for operator {}", ctx.accounts.launchpad.key(), operator);

    Ok(())
}
