use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Invalid rate curve: min_amount must be below max_amount and min_apy at most max_apy")]
    InvalidCurve,

    #[msg("Early unstake fine exceeds 10000 basis points")]
    InvalidFineRate,

    #[msg("Caller is not authorized for this operation")]
    Unauthorized,

    #[msg("Settled rewards are below the minimum claim amount")]
    BelowMinClaim,

    #[msg("Rewards cannot be claimed before the claim unlock period elapses")]
    ClaimLocked,

    #[msg("No unstake request is pending for this staker")]
    NoUnstakeRequest,

    #[msg("The unstake request has expired; submit a new request")]
    UnstakeRequestExpired,

    #[msg("Insufficient balance for the requested operation")]
    InsufficientBalance,

    #[msg("Math operation overflowed")]
    MathOverflow,

    #[msg("Underflow occurred")]
    Underflow,

    #[msg("Invalid timestamp or period value")]
    InvalidTimestamp,
}
