use cw_storage_plus::Item;
use token_migration_api::api::{MigrationConfig, QuoteRoute};

pub const CONFIG: Item<MigrationConfig> = Item::new("config");

/// One-way flag. False at instantiation, flipped true exactly once by the
/// admin after the successor pool is funded; never unset.
pub const LIQUIDITY_READY: Item<bool> = Item::new("liquidity_ready");

/// Absent until configured; frozen once liquidity is marked ready.
pub const QUOTE_ROUTE: Item<QuoteRoute> = Item::new("quote_route");
