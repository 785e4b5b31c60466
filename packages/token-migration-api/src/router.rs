use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use cw_asset::AssetInfo;

/// One hop of a swap route.
#[cw_serde]
pub struct SwapOperation {
    pub offer_asset_info: AssetInfo,
    pub ask_asset_info: AssetInfo,
}

/// Read-only pricing interface of the AMM router. The controller only ever
/// simulates; it never submits a swap of its own.
#[cw_serde]
pub enum SwapRouterQueryMsg {
    SimulateSwapOperations {
        offer_amount: Uint128,
        operations: Vec<SwapOperation>,
    },
}

#[cw_serde]
pub struct SimulateSwapOperationsResponse {
    pub amount: Uint128,
}
