/// Instruction module organizing all launchpad operations into logical groups.
/// Lifecycle instructions create, initialize and start a sale, whitelist
/// instructions manage eligibility, `purchase` accrues claims, and settlement
/// instructions release claims, proceeds and leftovers once the window ended.

// Lifecycle
pub mod create_launchpad;   // Bind an operator to a fresh ledger
pub mod initialize;         // Bind mints and snapshot the deposit
pub mod start;              // Fix window and price

// Whitelist registry
pub mod set_whitelist;      // Single address
pub mod set_whitelist_many; // Same flag for a batch of addresses

// Claims ledger
pub mod purchase;

// Settlement
pub mod release;            // One beneficiary
pub mod release_many;       // Batch, skipping empty claims
pub mod release_payments;   // Operator sweeps proceeds
pub mod release_unclaimed;  // Operator sweeps leftovers once

pub use create_launchpad::*;
pub use initialize::*;
pub use start::*;
pub use set_whitelist::*;
pub use set_whitelist_many::*;
pub use purchase::*;
pub use release::*;
pub use release_many::*;
pub use release_payments::*;
pub use release_unclaimed::*;
