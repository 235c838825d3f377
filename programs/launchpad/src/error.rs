//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    // Authorization errors
    #[msg("Caller is not the launchpad operator")]
    Unauthorized,

    // Phase errors
    #[msg("A launchpad can only be initialized once")]
    AlreadyInitialized,

    #[msg("Launchpad has not been initialized yet")]
    NotInitialized,

    #[msg("A launchpad can only be started once")]
    AlreadyStarted,

    #[msg("Launchpad has not been started yet")]
    NotStarted,

    // Temporal errors
    #[msg("End time needs to be in the future")]
    EndTimeInPast,

    #[msg("End time needs to be at most 12 weeks in the future")]
    WindowTooLong,

    #[msg("Sale window has already ended")]
    SaleEnded,

    #[msg("Launchpad has not ended yet")]
    WindowNotEnded,

    // Eligibility errors
    #[msg("Beneficiary has not been whitelisted for this launch")]
    NotWhitelisted,

    // Capacity errors
    #[msg("Purchase exceeds the total claimable amount")]
    ExceedsClaimable,

    // Redundancy errors
    #[msg("Nothing to release")]
    NothingToRelease,

    // Deposit and account validation errors
    #[msg("The launched token vault must be funded before initialization")]
    EmptyDeposit,

    #[msg("Launched and payment mints must differ")]
    IdenticalMints,

    #[msg("Invalid token mint")]
    InvalidMint,

    #[msg("Invalid vault")]
    InvalidVault,

    #[msg("Participant account does not match the expected PDA")]
    InvalidParticipantAccount,

    #[msg("Token account is not owned by the beneficiary or has the wrong mint")]
    InvalidBeneficiaryAccount,

    #[msg("Remaining accounts do not match the instruction arguments")]
    InvalidRemainingAccounts,

    // Math errors
    #[msg("Math overflow")]
    MathOverflow,
}
