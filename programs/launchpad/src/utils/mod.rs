/// Utility module providing overflow-safe arithmetic, fixed-point price math
/// and token transfer helpers shared by the instruction handlers.
pub mod math_price;           // Fixed-point cost computation
pub mod math_safe;            // Overflow-safe arithmetic traits
pub mod transfers;            // Token CPI helpers

// Re-exports
pub use math_price::*;
pub use math_safe::*;
pub use transfers::*;
