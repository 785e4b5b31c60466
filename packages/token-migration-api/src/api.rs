use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_asset::AssetInfo;
use std::fmt;

/// Immutable controller configuration, set once at instantiation.
#[cw_serde]
pub struct MigrationConfig {
    /// CW20 token being phased out (V1).
    pub legacy_token: Addr,
    /// CW20 token holders migrate into (V2).
    pub successor_token: Addr,
    /// Opening of the fixed-rate migration window.
    pub migration_start_time: Timestamp,
    /// Length of the fixed-rate window, in seconds. Once it elapses,
    /// migration requires AMM pricing.
    pub phase_one_duration: u64,
    /// Where surrendered legacy tokens are forwarded. The controller itself,
    /// or a burn sink.
    pub payout_receiver: Addr,
}

/// The AMM router queried for phase-two pricing, and the base asset both
/// tokens have liquidity against. The legacy token's only deep liquidity is
/// against the intermediate asset, never directly against the successor.
#[cw_serde]
pub struct QuoteRoute {
    pub router: Addr,
    pub intermediate_asset: AssetInfo,
}

/// Derived from block time and the one-way liquidity flag; never stored.
#[cw_serde]
#[derive(Copy)]
pub enum MigrationPhase {
    /// Block time has not reached the migration start.
    Inactive,
    /// Guaranteed 1:1 window for early migrators, before any market exists.
    FixedRate,
    /// Payout is shadow-priced off an AMM quote. Entered either by the
    /// liquidity flag being set, or by the fixed-rate window elapsing
    /// (in which case migration is blocked until the flag is set).
    AmmPriced,
}

impl fmt::Display for MigrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationPhase::Inactive => write!(f, "inactive"),
            MigrationPhase::FixedRate => write!(f, "fixed_rate"),
            MigrationPhase::AmmPriced => write!(f, "amm_priced"),
        }
    }
}

#[cw_serde]
pub struct ExpectedMigrationOutputParams {
    pub amount: Uint128,
}

////// Responses

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub config: MigrationConfig,
    pub quote_route: Option<QuoteRoute>,
}

#[cw_serde]
pub struct PhaseResponse {
    pub phase: MigrationPhase,
    pub liquidity_ready: bool,
    pub migration_start_time: Timestamp,
    pub phase_one_end_time: Timestamp,
}

#[cw_serde]
pub struct ExpectedMigrationOutputResponse {
    pub amount: Uint128,
}
