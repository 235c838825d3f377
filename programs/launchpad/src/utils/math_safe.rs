/// Overflow-safe arithmetic for every ledger counter. Uses checked arithmetic
/// that returns errors instead of wrapping and logs the offending operands.

use anchor_lang::prelude::*;
use crate::error::LaunchpadError;

// ============================================================================
// Type Definitions
// ============================================================================

pub trait SafeMath<T> {
    fn safe_add(self, v: T) -> Result<T>;
}

// ============================================================================
// Core Implementation
// ============================================================================

macro_rules! impl_safe_math {
    ($type:ty) => {
        impl SafeMath<$type> for $type {
            fn safe_add(self, v: $type) -> Result<$type> {
                self.checked_add(v).ok_or_else(|| {
                    msg!("Math overflow in safe_add: {} + {}", self, v);
                    LaunchpadError::MathOverflow.into()
                })
            }
        }
    };
}

// Token amounts
impl_safe_math!(u64);
// Unix timestamps
impl_safe_math!(i64);

// ============================================================================
// Tests
// ============================================================================
