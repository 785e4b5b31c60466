use common::cw::Context;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use token_migration_api::error::TokenMigrationError::Unauthorized;
use token_migration_api::error::TokenMigrationResult;

pub const ADMIN: Item<Addr> = Item::new("admin");

/// Assert that the caller is the migration admin.
/// If the validation succeeds, returns the admin address.
pub fn admin_caller_only(ctx: &Context) -> TokenMigrationResult<Addr> {
    let admin = ADMIN.load(ctx.deps.storage)?;

    if ctx.info.sender != admin {
        return Err(Unauthorized);
    }

    Ok(admin)
}
