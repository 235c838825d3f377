/// PDA (Program Derived Address) derivation module.
/// Single source of truth for the launchpad and participant addresses, shared
/// by the instruction handlers and off-chain callers.
use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::constants::{LAUNCHPAD_SEED, PARTICIPANT_SEED};

/// Derive launchpad PDA
pub fn derive_launchpad_pda(operator: &Pubkey, seed: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LAUNCHPAD_SEED, operator.as_ref(), &seed.to_le_bytes()],
        program_id,
    )
}

/// Derive participant PDA
pub fn derive_participant_pda(launchpad: &Pubkey, address: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PARTICIPANT_SEED, launchpad.as_ref(), address.as_ref()],
        program_id,
    )
}

/// Derive the launchpad-owned vault (associated token account) for `mint`
pub fn derive_vault(launchpad: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(launchpad, mint, token_program)
}
