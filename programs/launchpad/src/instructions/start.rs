use anchor_lang::prelude::*;

use crate::{constants::LAUNCHPAD_SEED, events::SaleStarted, state::Launchpad};

#[derive(Accounts)]
pub struct Start<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCHPAD_SEED, launchpad.operator.as_ref(), &launchpad.seed.to_le_bytes()],
        bump = launchpad.bump
    )]
    pub launchpad: Account<'info, Launchpad>,
}

pub fn start(ctx: Context<Start>, end_time: i64, price: u128) -> Result<()> {
    let launchpad = &mut ctx.accounts.launchpad;
    launchpad.ensure_operator(&ctx.accounts.operator.key())?;

    let now = Clock::get()?.unix_timestamp;
    launchpad.start(now, end_time, price)?;

    emit!(SaleStarted {
        launchpad: launchpad.key(),
        end_time,
        price,
        timestamp: now,
    });
    msg!("Started launchpad {} until {} at price {}", launchpad.key(), end_time, price);

    Ok(())
}
