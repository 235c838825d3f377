//! Global constants for the launchpad program
//!
//! Centralized constants for PDA seeds and sale parameters

use anchor_lang::prelude::*;

// PDA seed constants
#[constant]
pub const LAUNCHPAD_SEED: &[u8] = b"launchpad";

#[constant]
pub const PARTICIPANT_SEED: &[u8] = b"participant";

// Price constants
/// Fixed-point scale of `Launchpad::price` (18 fractional digits).
/// cost = amount * price / PRICE_SCALE
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

// Window constants
pub const SECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60;

/// Longest sale window accepted by `start`, measured from the start instant
#[constant]
pub const MAX_SALE_DURATION: i64 = 12 * SECONDS_PER_WEEK;
