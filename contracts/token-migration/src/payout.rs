use crate::state::QUOTE_ROUTE;
use common::cw::QueryContext;
use cosmwasm_std::Uint128;
use cw_asset::AssetInfo;
use token_migration_api::api::{MigrationConfig, MigrationPhase};
use token_migration_api::error::TokenMigrationError::{
    LiquidityNotReady, NotActive, QuoteRouteNotSet,
};
use token_migration_api::error::TokenMigrationResult;
use token_migration_api::router::{
    SimulateSwapOperationsResponse, SwapOperation, SwapRouterQueryMsg,
};

/// Computes the successor-token amount that migrating `amount` of legacy
/// tokens pays out under the given phase.
///
/// Shared between the migrate execution path and the read-only quote query,
/// so a caller who quotes immediately before migrating sees the same number
/// barring pool price movement in between.
pub fn expected_payout(
    qctx: &QueryContext,
    config: &MigrationConfig,
    phase: MigrationPhase,
    liquidity_ready: bool,
    amount: Uint128,
) -> TokenMigrationResult<Uint128> {
    match phase {
        MigrationPhase::Inactive => Err(NotActive),
        // both tokens share the smallest denomination, so the guaranteed
        // early-migrator rate is a straight 1:1
        MigrationPhase::FixedRate => Ok(amount),
        MigrationPhase::AmmPriced => {
            if !liquidity_ready {
                // a quote against an unfunded pool would be degenerate or
                // trivially manipulable
                return Err(LiquidityNotReady);
            }
            quote_amm_output(qctx, config, amount)
        }
    }
}

/// Shadow pricing: ask the router what swapping `amount` of legacy tokens
/// into the successor through the intermediate asset would currently yield.
/// The payout is then made from the controller's own reserve; no trade is
/// ever routed through the pool, so the controller's call cannot itself move
/// the price or get sandwiched.
fn quote_amm_output(
    qctx: &QueryContext,
    config: &MigrationConfig,
    amount: Uint128,
) -> TokenMigrationResult<Uint128> {
    let route = QUOTE_ROUTE
        .may_load(qctx.deps.storage)?
        .ok_or(QuoteRouteNotSet)?;

    let operations = vec![
        SwapOperation {
            offer_asset_info: AssetInfo::cw20(config.legacy_token.clone()),
            ask_asset_info: route.intermediate_asset.clone(),
        },
        SwapOperation {
            offer_asset_info: route.intermediate_asset,
            ask_asset_info: AssetInfo::cw20(config.successor_token.clone()),
        },
    ];

    let response: SimulateSwapOperationsResponse = qctx.deps.querier.query_wasm_smart(
        route.router.to_string(),
        &SwapRouterQueryMsg::SimulateSwapOperations {
            offer_amount: amount,
            operations,
        },
    )?;

    Ok(response.amount)
}
