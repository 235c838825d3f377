//! Launchpad ledger account
//!
//! Holds the lifecycle phase, the bound mints and vaults, the sale window and
//! the running accrual totals. Every transition of the sale is a method on
//! `Launchpad` taking the current unix time explicitly, so the instruction
//! handlers only load accounts, call into the ledger and move tokens.

use anchor_lang::prelude::*;

use crate::constants::{LAUNCHPAD_SEED, MAX_SALE_DURATION};
use crate::error::LaunchpadError;
use crate::state::{LaunchPhase, Participant};
use crate::utils::{payment_for, SafeMath};

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Launchpad {
    /// Sole holder of privileged operations
    pub operator: Pubkey,
    /// Distinguishes several launchpads created by the same operator
    pub seed: u64,

    /// Token being distributed
    pub launched_mint: Pubkey,
    /// Token accepted as payment
    pub payment_mint: Pubkey,
    /// Launchpad-owned account holding the launched token
    pub launched_vault: Pubkey,
    /// Launchpad-owned account collecting payments
    pub payment_vault: Pubkey,

    /// Launched vault balance snapshotted at initialization
    pub total_claimable: u64,
    /// Cumulative accrual across all purchases (never decreases)
    pub total_claimed: u64,

    /// Unix timestamp at which the sale window closes
    pub end_time: i64,
    /// Payment base units per launched base unit, scaled by `PRICE_SCALE`
    pub price: u128,

    pub phase: LaunchPhase,
    /// Set once the operator swept the unclaimed launched tokens
    pub unclaimed_released: bool,
    pub bump: u8,
}

impl Launchpad {
    pub const LEN: usize = 8 + Launchpad::INIT_SPACE;

    /// Fresh ledger bound to `operator`; every other field is zero.
    pub fn new(operator: Pubkey, seed: u64, bump: u8) -> Self {
        Self {
            operator,
            seed,
            launched_mint: Pubkey::default(),
            payment_mint: Pubkey::default(),
            launched_vault: Pubkey::default(),
            payment_vault: Pubkey::default(),
            total_claimable: 0,
            total_claimed: 0,
            end_time: 0,
            price: 0,
            phase: LaunchPhase::Uninitialized,
            unclaimed_released: false,
            bump,
        }
    }

    // ------------------------------------------------------------------------
    // Authorization
    // ------------------------------------------------------------------------

    pub fn ensure_operator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.operator, LaunchpadError::Unauthorized);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Bind both mints and their vaults and snapshot the deposited balance.
    pub fn initialize(
        &mut self,
        launched_mint: Pubkey,
        payment_mint: Pubkey,
        launched_vault: Pubkey,
        payment_vault: Pubkey,
        deposited: u64,
    ) -> Result<()> {
        require!(
            self.phase.can_transition_to(LaunchPhase::Initialized),
            LaunchpadError::AlreadyInitialized
        );
        require_keys_neq!(launched_mint, payment_mint, LaunchpadError::IdenticalMints);
        require!(deposited > 0, LaunchpadError::EmptyDeposit);

        self.launched_mint = launched_mint;
        self.payment_mint = payment_mint;
        self.launched_vault = launched_vault;
        self.payment_vault = payment_vault;
        self.total_claimable = deposited;
        self.total_claimed = 0;
        self.phase = LaunchPhase::Initialized;
        Ok(())
    }

    /// Fix the sale window and price.
    pub fn start(&mut self, now: i64, end_time: i64, price: u128) -> Result<()> {
        match self.phase {
            LaunchPhase::Uninitialized => return err!(LaunchpadError::NotInitialized),
            LaunchPhase::Started => return err!(LaunchpadError::AlreadyStarted),
            LaunchPhase::Initialized => {}
        }
        require!(end_time > now, LaunchpadError::EndTimeInPast);
        let latest_end = now.safe_add(MAX_SALE_DURATION)?;
        require!(end_time <= latest_end, LaunchpadError::WindowTooLong);

        self.end_time = end_time;
        self.price = price;
        self.phase = LaunchPhase::Started;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Window checks
    // ------------------------------------------------------------------------

    /// Purchases are accepted while started and before `end_time`.
    pub fn is_open(&self, now: i64) -> bool {
        self.phase.is_started() && now < self.end_time
    }

    /// Settlement is possible once started and `end_time` has passed.
    pub fn is_ended(&self, now: i64) -> bool {
        self.phase.is_started() && now >= self.end_time
    }

    pub fn ensure_open(&self, now: i64) -> Result<()> {
        require!(self.phase.is_started(), LaunchpadError::NotStarted);
        require!(now < self.end_time, LaunchpadError::SaleEnded);
        Ok(())
    }

    pub fn ensure_ended(&self, now: i64) -> Result<()> {
        require!(self.is_ended(now), LaunchpadError::WindowNotEnded);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Claims ledger
    // ------------------------------------------------------------------------

    /// Payment owed for `amount` launched base units at the sale price.
    pub fn cost_of(&self, amount: u64) -> Result<u64> {
        payment_for(amount, self.price)
    }

    /// Launched tokens still available for accrual.
    pub fn remaining(&self) -> u64 {
        self.total_claimable.saturating_sub(self.total_claimed)
    }

    /// Accrue `amount` to `participant`. Both counters are checked before
    /// either is written, so a rejected purchase leaves no partial effect.
    pub fn record_purchase(&mut self, participant: &mut Participant, amount: u64) -> Result<()> {
        let total_claimed = self.total_claimed.safe_add(amount)?;
        require!(
            total_claimed <= self.total_claimable,
            LaunchpadError::ExceedsClaimable
        );
        let claim = participant.claim.safe_add(amount)?;

        participant.claim = claim;
        self.total_claimed = total_claimed;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Settlement
    // ------------------------------------------------------------------------

    /// Launched tokens never accrued by any purchase, zero once swept.
    pub fn unclaimed(&self) -> u64 {
        if self.unclaimed_released {
            0
        } else {
            self.remaining()
        }
    }

    /// Amount of the operator's leftover sweep. Only the first call returns a
    /// non-zero amount.
    pub fn take_unclaimed(&mut self) -> u64 {
        let amount = self.unclaimed();
        self.unclaimed_released = true;
        amount
    }

    pub fn signer(&self) -> LaunchpadSigner {
        LaunchpadSigner {
            operator: self.operator,
            seed: self.seed.to_le_bytes(),
            bump: [self.bump],
        }
    }
}

/// Owned copy of the launchpad PDA seeds, used to sign vault transfers.
pub struct LaunchpadSigner {
    operator: Pubkey,
    seed: [u8; 8],
    bump: [u8; 1],
}

impl LaunchpadSigner {
    pub fn seeds(&self) -> [&[u8]; 4] {
        [LAUNCHPAD_SEED, self.operator.as_ref(), &self.seed, &self.bump]
    }
}

// ============================================================================
// Tests
// ============================================================================
