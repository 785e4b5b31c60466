use cosmwasm_std::Api;
use token_migration_api::api::QuoteRoute;
use token_migration_api::error::TokenMigrationError::{
    SameLegacyAndSuccessorToken, ZeroMigrationAmount, ZeroPhaseOneDuration,
};
use token_migration_api::error::TokenMigrationResult;
use token_migration_api::msg::{InstantiateMsg, MigrateTokensMsg, QuoteRouteMsg};

pub fn validate_instantiate_msg(msg: &InstantiateMsg) -> TokenMigrationResult<()> {
    if msg.legacy_token == msg.successor_token {
        return Err(SameLegacyAndSuccessorToken);
    }

    if msg.phase_one_duration == 0 {
        return Err(ZeroPhaseOneDuration);
    }

    Ok(())
}

pub fn validate_migrate_msg(msg: &MigrateTokensMsg) -> TokenMigrationResult<()> {
    if msg.amount.is_zero() {
        return Err(ZeroMigrationAmount);
    }

    Ok(())
}

pub fn check_quote_route(api: &dyn Api, msg: QuoteRouteMsg) -> TokenMigrationResult<QuoteRoute> {
    let router = api.addr_validate(&msg.router)?;
    let intermediate_asset = msg.intermediate_asset.check(api, None)?;

    Ok(QuoteRoute {
        router,
        intermediate_asset,
    })
}
