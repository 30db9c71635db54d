/// Raw token amounts and their fixed-point rendering.
pub mod amount;

/// Accounts and the per-denom balances they hold.
pub mod account;

/// Measuring and rendering balance tables.
/// Widths are computed over every account before any table is rendered,
/// so that all tables line up.
pub mod report;

/// Refresh interface for account balances, plus "in memory" implementation.
pub mod source;

/// Snapshot parsing and report orchestration, shared by the binary and
/// the integration tests.
pub mod bin_utils;
