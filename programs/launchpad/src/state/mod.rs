//! Launchpad state structures
//!
//! One `Launchpad` account per sale and one `Participant` account per
//! whitelisted address.

pub mod launchpad;
pub mod participant;
pub mod pda;
pub mod phase;

pub use launchpad::*;
pub use participant::*;
pub use pda::*;
pub use phase::*;
