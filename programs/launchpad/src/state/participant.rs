//! Participant record
//!
//! One account per (launchpad, address) pair holding the whitelist flag and
//! the accrued-but-unreleased claim. Accounts are only created by whitelisting,
//! so a missing account reads as "not whitelisted, nothing to release".

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::error::LaunchpadError;

#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Participant {
    /// Launchpad this record belongs to
    pub launchpad: Pubkey,
    /// Beneficiary identity
    pub address: Pubkey,
    /// Eligibility to receive purchases
    pub whitelisted: bool,
    /// Accrued allocation not yet released, in launched base units
    pub claim: u64,
    pub bump: u8,
}

impl Participant {
    pub const LEN: usize = 8 + Participant::INIT_SPACE;

    pub fn new(launchpad: Pubkey, address: Pubkey, whitelisted: bool, bump: u8) -> Self {
        Self {
            launchpad,
            address,
            whitelisted,
            claim: 0,
            bump,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.launchpad != Pubkey::default()
    }

    /// Take the whole claim out of the ledger, leaving zero behind.
    pub fn take_claim(&mut self) -> Result<u64> {
        require!(self.claim > 0, LaunchpadError::NothingToRelease);
        let amount = self.claim;
        self.claim = 0;
        Ok(amount)
    }

    // ------------------------------------------------------------------------
    // Raw account access
    // ------------------------------------------------------------------------

    /// Read a participant record, `None` when the PDA has not been created.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        Participant::try_deserialize(&mut &data[..]).map(Some)
    }

    /// Write the record back into its account.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        require_keys_eq!(*info.owner, crate::ID, LaunchpadError::InvalidParticipantAccount);
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    /// Allocate a participant PDA owned by this program, paid by `payer`.
    ///
    /// Mirrors Anchor's `init`: an address that already holds lamports is
    /// topped up to rent exemption, allocated and assigned instead of created.
    pub fn create_account<'info>(
        payer: AccountInfo<'info>,
        target: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
        signer_seeds: &[&[u8]],
    ) -> Result<()> {
        let rent = Rent::get()?.minimum_balance(Self::LEN);
        let current_lamports = target.lamports();

        if current_lamports == 0 {
            return system_program::create_account(
                CpiContext::new_with_signer(
                    system_program,
                    CreateAccount { from: payer, to: target },
                    &[signer_seeds],
                ),
                rent,
                Self::LEN as u64,
                &crate::ID,
            );
        }

        let top_up = rent.saturating_sub(current_lamports);
        if top_up > 0 {
            system_program::transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer { from: payer, to: target.clone() },
                ),
                top_up,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate { account_to_allocate: target.clone() },
                &[signer_seeds],
            ),
            Self::LEN as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program,
                Assign { account_to_assign: target },
                &[signer_seeds],
            ),
            &crate::ID,
        )
    }
}
