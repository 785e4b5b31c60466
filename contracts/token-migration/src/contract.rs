use crate::admin::{admin_caller_only, ADMIN};
use crate::payout::expected_payout;
use crate::phase::{self, phase_at, phase_one_end_time};
use crate::state::{CONFIG, LIQUIDITY_READY, QUOTE_ROUTE};
use crate::validate::{check_quote_route, validate_instantiate_msg, validate_migrate_msg};
use common::cw::{Context, QueryContext};
use cosmwasm_std::{
    entry_point, to_json_binary, wasm_execute, Addr, Binary, Deps, DepsMut, Env, MessageInfo,
    Response, Uint128,
};
use cw2::set_contract_version;
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use token_migration_api::api::{
    ConfigResponse, ExpectedMigrationOutputParams, ExpectedMigrationOutputResponse,
    MigrationConfig, PhaseResponse,
};
use token_migration_api::error::TokenMigrationError::{
    InsufficientAllowance, InsufficientBalance, InsufficientReserve, LiquidityAlreadyReady,
    QuoteRouteNotSet, SlippageExceeded,
};
use token_migration_api::error::TokenMigrationResult;
use token_migration_api::msg::{
    ExecuteMsg, InstantiateMsg, MigrateMsg, MigrateTokensMsg, QueryMsg, QuoteRouteMsg,
};
use token_migration_api::response::{
    execute_mark_liquidity_ready_response, execute_migrate_response,
    execute_register_exclusions_response, execute_set_quote_route_response, instantiate_response,
};
use token_migration_api::token::SuccessorTokenExecuteMsg;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:token-migration";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> TokenMigrationResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_instantiate_msg(&msg)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let legacy_token = deps.api.addr_validate(&msg.legacy_token)?;
    let successor_token = deps.api.addr_validate(&msg.successor_token)?;

    // surrendered legacy tokens accumulate on the controller itself unless a
    // separate sink is configured
    let payout_receiver = match &msg.payout_receiver {
        Some(receiver) => deps.api.addr_validate(receiver)?,
        None => env.contract.address.clone(),
    };

    CONFIG.save(
        deps.storage,
        &MigrationConfig {
            legacy_token,
            successor_token,
            migration_start_time: msg.migration_start_time,
            phase_one_duration: msg.phase_one_duration,
            payout_receiver,
        },
    )?;
    ADMIN.save(deps.storage, &admin)?;
    LIQUIDITY_READY.save(deps.storage, &false)?;

    if let Some(route) = msg.quote_route {
        let route = check_quote_route(deps.api, route)?;
        QUOTE_ROUTE.save(deps.storage, &route)?;
    }

    Ok(instantiate_response(admin.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> TokenMigrationResult<Response> {
    let ctx = &mut Context { deps, env, info };

    match msg {
        ExecuteMsg::Migrate(msg) => migrate_tokens(ctx, msg),
        ExecuteMsg::MarkLiquidityReady {} => mark_liquidity_ready(ctx),
        ExecuteMsg::SetQuoteRoute(msg) => set_quote_route(ctx, msg),
        ExecuteMsg::RegisterExclusions {} => register_exclusions(ctx),
    }
}

/// Surrender `amount` of the legacy token and receive the phase-priced amount
/// of the successor token from the controller's reserve. All-or-nothing: any
/// failed precondition leaves every balance untouched.
fn migrate_tokens(ctx: &mut Context, msg: MigrateTokensMsg) -> TokenMigrationResult<Response> {
    validate_migrate_msg(&msg)?;

    let config = CONFIG.load(ctx.deps.storage)?;
    let liquidity_ready = LIQUIDITY_READY.load(ctx.deps.storage)?;

    let qctx = QueryContext::from(ctx.deps.as_ref(), ctx.env.clone());
    let phase = phase_at(&config, liquidity_ready, qctx.env.block.time);

    let amount_out = expected_payout(&qctx, &config, phase, liquidity_ready, msg.amount)?;

    if amount_out < msg.min_amount_out {
        return Err(SlippageExceeded {
            expected: amount_out,
            minimum: msg.min_amount_out,
        });
    }

    let caller = ctx.info.sender.clone();
    assert_caller_can_fund(&qctx, &config, &caller, msg.amount)?;
    assert_reserve_covers(&qctx, &config, amount_out)?;

    let collect_legacy = wasm_execute(
        config.legacy_token.to_string(),
        &Cw20ExecuteMsg::TransferFrom {
            owner: caller.to_string(),
            recipient: config.payout_receiver.to_string(),
            amount: msg.amount,
        },
        vec![],
    )?;
    let pay_successor = wasm_execute(
        config.successor_token.to_string(),
        &Cw20ExecuteMsg::Transfer {
            recipient: caller.to_string(),
            amount: amount_out,
        },
        vec![],
    )?;

    Ok(
        execute_migrate_response(
            caller.to_string(),
            msg.amount,
            amount_out,
            phase,
            qctx.env.block.time,
        )
        .add_message(collect_legacy)
        .add_message(pay_successor),
    )
}

/// Typed pass-throughs of the legacy token's own failure modes, checked
/// up-front so the caller gets a taxonomy error instead of a raw sub-message
/// abort.
fn assert_caller_can_fund(
    qctx: &QueryContext,
    config: &MigrationConfig,
    caller: &Addr,
    amount: Uint128,
) -> TokenMigrationResult<()> {
    let allowance: AllowanceResponse = qctx.deps.querier.query_wasm_smart(
        config.legacy_token.to_string(),
        &Cw20QueryMsg::Allowance {
            owner: caller.to_string(),
            spender: qctx.env.contract.address.to_string(),
        },
    )?;

    if allowance.expires.is_expired(&qctx.env.block) || allowance.allowance < amount {
        return Err(InsufficientAllowance);
    }

    let balance: BalanceResponse = qctx.deps.querier.query_wasm_smart(
        config.legacy_token.to_string(),
        &Cw20QueryMsg::Balance {
            address: caller.to_string(),
        },
    )?;

    if balance.balance < amount {
        return Err(InsufficientBalance);
    }

    Ok(())
}

fn assert_reserve_covers(
    qctx: &QueryContext,
    config: &MigrationConfig,
    amount_out: Uint128,
) -> TokenMigrationResult<()> {
    let reserve: BalanceResponse = qctx.deps.querier.query_wasm_smart(
        config.successor_token.to_string(),
        &Cw20QueryMsg::Balance {
            address: qctx.env.contract.address.to_string(),
        },
    )?;

    if reserve.balance < amount_out {
        return Err(InsufficientReserve);
    }

    Ok(())
}

/// Attest that the successor pool behind the configured quote route is
/// funded. One-way; re-invoking once set is an idempotent no-op.
fn mark_liquidity_ready(ctx: &mut Context) -> TokenMigrationResult<Response> {
    admin_caller_only(ctx)?;

    // the flag attests that the quoted pool is funded, which is incoherent
    // without a route to quote against
    if QUOTE_ROUTE.may_load(ctx.deps.storage)?.is_none() {
        return Err(QuoteRouteNotSet);
    }

    let already_ready = phase::mark_liquidity_ready(ctx.deps.storage)?;

    Ok(execute_mark_liquidity_ready_response(already_ready))
}

fn set_quote_route(ctx: &mut Context, msg: QuoteRouteMsg) -> TokenMigrationResult<Response> {
    admin_caller_only(ctx)?;

    // once liquidity is attested, the price source cannot be swapped out
    // from under an active AMM-priced phase
    if LIQUIDITY_READY.load(ctx.deps.storage)? {
        return Err(LiquidityAlreadyReady);
    }

    let route = check_quote_route(ctx.deps.api, msg)?;
    QUOTE_ROUTE.save(ctx.deps.storage, &route)?;

    Ok(execute_set_quote_route_response(route.router.to_string()))
}

/// Exempt the controller's own address from the successor token's fee,
/// max-transaction, max-wallet, and pause gates. The controller must have
/// been granted that authority on the token.
fn register_exclusions(ctx: &mut Context) -> TokenMigrationResult<Response> {
    admin_caller_only(ctx)?;

    let config = CONFIG.load(ctx.deps.storage)?;
    let controller = ctx.env.contract.address.to_string();

    let exclusions = vec![
        SuccessorTokenExecuteMsg::ExcludeFromFees {
            account: controller.clone(),
            exclude: true,
        },
        SuccessorTokenExecuteMsg::ExcludeFromMaxTransactionLimit {
            account: controller.clone(),
            exclude: true,
        },
        SuccessorTokenExecuteMsg::ExcludeFromMaxWallet {
            account: controller.clone(),
            exclude: true,
        },
        SuccessorTokenExecuteMsg::ExcludeFromPause {
            account: controller.clone(),
            exclude: true,
        },
    ];

    let exclusion_msgs = exclusions
        .into_iter()
        .map(|msg| wasm_execute(config.successor_token.to_string(), &msg, vec![]))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(execute_register_exclusions_response(controller).add_messages(exclusion_msgs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> TokenMigrationResult<Binary> {
    let qctx = QueryContext { deps, env };

    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(qctx)?)?,
        QueryMsg::Phase {} => to_json_binary(&query_phase(qctx)?)?,
        QueryMsg::ExpectedMigrationOutput(params) => {
            to_json_binary(&query_expected_migration_output(qctx, params)?)?
        }
    };

    Ok(response)
}

pub fn query_config(qctx: QueryContext) -> TokenMigrationResult<ConfigResponse> {
    let admin = ADMIN.load(qctx.deps.storage)?;
    let config = CONFIG.load(qctx.deps.storage)?;
    let quote_route = QUOTE_ROUTE.may_load(qctx.deps.storage)?;

    Ok(ConfigResponse {
        admin,
        config,
        quote_route,
    })
}

pub fn query_phase(qctx: QueryContext) -> TokenMigrationResult<PhaseResponse> {
    let config = CONFIG.load(qctx.deps.storage)?;
    let liquidity_ready = LIQUIDITY_READY.load(qctx.deps.storage)?;

    Ok(PhaseResponse {
        phase: phase_at(&config, liquidity_ready, qctx.env.block.time),
        liquidity_ready,
        migration_start_time: config.migration_start_time,
        phase_one_end_time: phase_one_end_time(&config),
    })
}

/// The exact amount `Migrate` would pay out right now, with the same formula
/// selection and the same phase failures, but no allowance or balance
/// requirements. Callers use it to choose `min_amount_out` defensively.
pub fn query_expected_migration_output(
    qctx: QueryContext,
    params: ExpectedMigrationOutputParams,
) -> TokenMigrationResult<ExpectedMigrationOutputResponse> {
    let config = CONFIG.load(qctx.deps.storage)?;
    let liquidity_ready = LIQUIDITY_READY.load(qctx.deps.storage)?;

    let phase = phase_at(&config, liquidity_ready, qctx.env.block.time);
    let amount = expected_payout(&qctx, &config, phase, liquidity_ready, params.amount)?;

    Ok(ExpectedMigrationOutputResponse { amount })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> TokenMigrationResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("action", "migrate_contract"))
}
