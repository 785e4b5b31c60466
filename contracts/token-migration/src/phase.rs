use crate::state::LIQUIDITY_READY;
use cosmwasm_std::{Storage, Timestamp};
use token_migration_api::api::{MigrationConfig, MigrationPhase};
use token_migration_api::error::TokenMigrationResult;

/// Derives the migration phase from block time and the liquidity flag.
///
/// The liquidity flag wins over the fixed-rate window: once an AMM price
/// source exists it is the only honest one, so pricing moves there
/// immediately and never returns to the fixed rate. Setting the flag while
/// still inactive pre-arms AMM pricing for the moment the time gate opens.
pub fn phase_at(
    config: &MigrationConfig,
    liquidity_ready: bool,
    now: Timestamp,
) -> MigrationPhase {
    if now < config.migration_start_time {
        return MigrationPhase::Inactive;
    }

    if liquidity_ready || now >= phase_one_end_time(config) {
        MigrationPhase::AmmPriced
    } else {
        MigrationPhase::FixedRate
    }
}

/// Saturates at the maximum representable timestamp, so a window configured
/// past the end of nanosecond time behaves as "phase 1 never expires" instead
/// of panicking in every phase derivation.
pub fn phase_one_end_time(config: &MigrationConfig) -> Timestamp {
    let window_nanos = config.phase_one_duration.saturating_mul(1_000_000_000);

    Timestamp::from_nanos(
        config
            .migration_start_time
            .nanos()
            .saturating_add(window_nanos),
    )
}

/// One-way transition of the liquidity flag. Invoking it again once set is a
/// no-op rather than an error, so operational scripts can retry safely.
/// Returns whether the flag was already set.
pub fn mark_liquidity_ready(storage: &mut dyn Storage) -> TokenMigrationResult<bool> {
    let already_ready = LIQUIDITY_READY.load(storage)?;

    if !already_ready {
        LIQUIDITY_READY.save(storage, &true)?;
    }

    Ok(already_ready)
}
