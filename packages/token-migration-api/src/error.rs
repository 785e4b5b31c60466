use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

pub type TokenMigrationResult<T> = Result<T, TokenMigrationError>;

#[derive(Error, Debug, PartialEq)]
pub enum TokenMigrationError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Migration is not yet active")]
    NotActive,

    #[error("Liquidity has not been marked ready")]
    LiquidityNotReady,

    #[error("Liquidity has already been marked ready")]
    LiquidityAlreadyReady,

    #[error("No quote route has been configured")]
    QuoteRouteNotSet,

    #[error("Migration amount must be greater than zero")]
    ZeroMigrationAmount,

    #[error("Phase one duration must be greater than zero")]
    ZeroPhaseOneDuration,

    #[error("Legacy and successor tokens must be different contracts")]
    SameLegacyAndSuccessorToken,

    #[error("Caller has not granted the controller a sufficient allowance")]
    InsufficientAllowance,

    #[error("Caller's legacy token balance does not cover the migration amount")]
    InsufficientBalance,

    #[error("Controller's successor token reserve does not cover the payout")]
    InsufficientReserve,

    #[error("Computed output {expected} is below the requested minimum {minimum}")]
    SlippageExceeded {
        expected: Uint128,
        minimum: Uint128,
    },
}

impl TokenMigrationError {
    /// Converts this TokenMigrationError into a StdError.
    pub fn std_err(&self) -> StdError {
        StdError::generic_err(format!("{:?}", self))
    }
}
