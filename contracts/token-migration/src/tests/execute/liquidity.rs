use crate::contract::{query_config, query_phase};
use crate::tests::helpers::{
    assert_attribute, env_at, instantiate_controller, mark_liquidity_ready, set_quote_route,
    stub_instantiate_msg, stub_quote_route, ADMIN, MIGRATION_START,
};
use crate::tests::querier::mock_querier::mock_dependencies;
use common::cw::testing::mock_query_ctx;
use cosmwasm_std::Addr;
use cw_asset::AssetInfoUnchecked;
use token_migration_api::error::TokenMigrationError::{
    LiquidityAlreadyReady, QuoteRouteNotSet, Unauthorized,
};
use token_migration_api::error::TokenMigrationResult;
use token_migration_api::msg::{InstantiateMsg, QuoteRouteMsg};

#[test]
fn non_admin_cannot_mark_liquidity_ready() -> TokenMigrationResult<()> {
    let mut deps = mock_dependencies();
    let env = env_at(MIGRATION_START);

    instantiate_controller(deps.as_mut(), &env, stub_instantiate_msg())?;

    let result = mark_liquidity_ready(deps.as_mut(), &env, "random_address");
    assert_eq!(result, Err(Unauthorized));

    Ok(())
}

#[test]
fn mark_liquidity_ready_requires_quote_route() -> TokenMigrationResult<()> {
    let mut deps = mock_dependencies();
    let env = env_at(MIGRATION_START);

    let msg = InstantiateMsg {
        quote_route: None,
        ..stub_instantiate_msg()
    };
    instantiate_controller(deps.as_mut(), &env, msg)?;

    let result = mark_liquidity_ready(deps.as_mut(), &env, ADMIN);
    assert_eq!(result, Err(QuoteRouteNotSet));

    Ok(())
}

#[test]
fn mark_liquidity_ready_is_one_way_and_idempotent() -> TokenMigrationResult<()> {
    let mut deps = mock_dependencies();
    let env = env_at(MIGRATION_START);

    instantiate_controller(deps.as_mut(), &env, stub_instantiate_msg())?;

    let response = mark_liquidity_ready(deps.as_mut(), &env, ADMIN)?;
    assert_attribute(&response, "already_ready", "false");

    let phase = query_phase(mock_query_ctx(deps.as_ref(), &env))?;
    assert!(phase.liquidity_ready);

    // re-invocation is a no-op, not an error, so operational scripts can retry
    let response = mark_liquidity_ready(deps.as_mut(), &env, ADMIN)?;
    assert_attribute(&response, "already_ready", "true");

    // the flag is never observed false again
    let phase = query_phase(mock_query_ctx(deps.as_ref(), &env))?;
    assert!(phase.liquidity_ready);

    Ok(())
}

#[test]
fn non_admin_cannot_set_quote_route() -> TokenMigrationResult<()> {
    let mut deps = mock_dependencies();
    let env = env_at(MIGRATION_START);

    instantiate_controller(deps.as_mut(), &env, stub_instantiate_msg())?;

    let result = set_quote_route(deps.as_mut(), &env, "random_address", stub_quote_route());
    assert_eq!(result, Err(Unauthorized));

    Ok(())
}

#[test]
fn set_quote_route_replaces_route_before_liquidity_ready() -> TokenMigrationResult<()> {
    let mut deps = mock_dependencies();
    let env = env_at(MIGRATION_START);

    instantiate_controller(deps.as_mut(), &env, stub_instantiate_msg())?;

    let new_route = QuoteRouteMsg {
        router: "another_router".to_string(),
        intermediate_asset: AssetInfoUnchecked::native("uother"),
    };
    set_quote_route(deps.as_mut(), &env, ADMIN, new_route)?;

    let response = query_config(mock_query_ctx(deps.as_ref(), &env))?;
    assert_eq!(
        response.quote_route.map(|route| route.router),
        Some(Addr::unchecked("another_router"))
    );

    Ok(())
}

#[test]
fn set_quote_route_after_liquidity_ready_fails() -> TokenMigrationResult<()> {
    let mut deps = mock_dependencies();
    let env = env_at(MIGRATION_START);

    instantiate_controller(deps.as_mut(), &env, stub_instantiate_msg())?;
    mark_liquidity_ready(deps.as_mut(), &env, ADMIN)?;

    let result = set_quote_route(deps.as_mut(), &env, ADMIN, stub_quote_route());
    assert_eq!(result, Err(LiquidityAlreadyReady));

    Ok(())
}
