//! Fixed-point price math
//!
//! `price` carries 18 fractional digits: it is the number of payment base
//! units owed per launched base unit, multiplied by `PRICE_SCALE`.

use anchor_lang::prelude::*;
use ethnum::U256;

use crate::{constants::PRICE_SCALE, error::LaunchpadError};

/// Payment owed for `amount` launched base units at `price`, rounded down.
///
/// The product is formed in 256 bits so any `u64 * u128` pair is exact; only
/// a result that does not fit a token amount is rejected.
pub fn payment_for(amount: u64, price: u128) -> Result<u64> {
    let cost: U256 = (<U256>::from(amount) * <U256>::from(price)) / <U256>::from(PRICE_SCALE);
    if cost > <U256>::from(u64::MAX) {
        msg!("Payment overflow: {} * {} / {}", amount, price, PRICE_SCALE);
        return err!(LaunchpadError::MathOverflow);
    }
    Ok(cost.as_u64())
}
