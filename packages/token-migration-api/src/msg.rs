use crate::api::{
    ConfigResponse, ExpectedMigrationOutputParams, ExpectedMigrationOutputResponse, PhaseResponse,
};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};
use cw_asset::AssetInfoUnchecked;

#[cw_serde]
pub struct InstantiateMsg {
    /// The only address allowed to run administrative operations.
    pub admin: String,
    pub legacy_token: String,
    pub successor_token: String,
    pub migration_start_time: Timestamp,
    /// Length of the fixed-rate window, in seconds.
    pub phase_one_duration: u64,
    /// Defaults to the controller itself when omitted.
    pub payout_receiver: Option<String>,
    /// May be supplied later via SetQuoteRoute, but must exist before
    /// liquidity can be marked ready.
    pub quote_route: Option<QuoteRouteMsg>,
}

#[cw_serde]
pub struct QuoteRouteMsg {
    pub router: String,
    pub intermediate_asset: AssetInfoUnchecked,
}

#[cw_serde]
pub struct MigrateTokensMsg {
    /// Legacy-token amount to surrender. The caller must hold it and have
    /// granted the controller an allowance covering it.
    pub amount: Uint128,
    /// Slippage floor; zero accepts any output.
    pub min_amount_out: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    Migrate(MigrateTokensMsg),
    MarkLiquidityReady {},
    SetQuoteRoute(QuoteRouteMsg),
    RegisterExclusions {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(PhaseResponse)]
    Phase {},
    #[returns(ExpectedMigrationOutputResponse)]
    ExpectedMigrationOutput(ExpectedMigrationOutputParams),
}

#[cw_serde]
pub struct MigrateMsg {}
