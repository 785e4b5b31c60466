use crate::api::MigrationPhase;
use cosmwasm_std::{Response, Timestamp, Uint128};

pub fn instantiate_response(admin: String) -> Response {
    Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
}

/// The MigrationExecuted event: who migrated, what went in, what came out,
/// and under which pricing regime.
pub fn execute_migrate_response(
    caller: String,
    amount_in: Uint128,
    amount_out: Uint128,
    phase: MigrationPhase,
    at: Timestamp,
) -> Response {
    Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("caller", caller)
        .add_attribute("amount_in", amount_in.to_string())
        .add_attribute("amount_out", amount_out.to_string())
        .add_attribute("phase", phase.to_string())
        .add_attribute("at", at.seconds().to_string())
}

pub fn execute_mark_liquidity_ready_response(already_ready: bool) -> Response {
    Response::new()
        .add_attribute("action", "mark_liquidity_ready")
        .add_attribute("already_ready", already_ready.to_string())
}

pub fn execute_set_quote_route_response(router: String) -> Response {
    Response::new()
        .add_attribute("action", "set_quote_route")
        .add_attribute("router", router)
}

pub fn execute_register_exclusions_response(controller: String) -> Response {
    Response::new()
        .add_attribute("action", "register_exclusions")
        .add_attribute("controller", controller)
}
