//! Launchpad phase tracking
//!
//! Defines the lifecycle phases of a launchpad from creation to an open sale.
//! The ended condition is not a stored phase: it is derived from the clock.

use anchor_lang::prelude::*;

/// Launchpad lifecycle phase
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, InitSpace)]
pub enum LaunchPhase {
    /// Created, operator bound, no mints yet
    #[default]
    Uninitialized,

    /// Mints bound and deposit snapshotted
    Initialized,

    /// Window and price fixed
    Started,
}

impl LaunchPhase {
    /// Validate phase transition. Phases only ever advance by one step.
    pub fn can_transition_to(&self, new_phase: LaunchPhase) -> bool {
        matches!(
            (self, new_phase),
            (LaunchPhase::Uninitialized, LaunchPhase::Initialized)
                | (LaunchPhase::Initialized, LaunchPhase::Started)
        )
    }

    pub fn is_started(&self) -> bool {
        matches!(self, LaunchPhase::Started)
    }
}
