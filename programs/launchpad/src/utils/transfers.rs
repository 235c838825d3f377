//! Token transfer utilities
//!
//! Every movement of funds in or out of the launchpad vaults goes through
//! `transfer_checked`, so both SPL Token and Token-2022 mints are supported.
//! Failures from the token program are returned unmodified.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, TransferChecked};

/// Transfer tokens out of a launchpad vault using the launchpad PDA as authority
pub fn transfer_from_vault<'info>(
    vault: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    launchpad: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
    decimals: u8,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = TransferChecked {
        from: vault,
        mint,
        to: destination,
        authority: launchpad,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);
    token_interface::transfer_checked(cpi_ctx, amount, decimals)
}

/// Pull tokens from a payer's account into a launchpad vault.
///
/// The launchpad PDA signs as the SPL delegate of `source`, so the payer must
/// have approved it for at least `amount` beforehand. Insufficient balance or
/// delegation is reported by the token program.
pub fn pull_with_allowance<'info>(
    source: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    launchpad: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
    decimals: u8,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = TransferChecked {
        from: source,
        mint,
        to: vault,
        authority: launchpad,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);
    token_interface::transfer_checked(cpi_ctx, amount, decimals)
}
