//! Stable exit codes for `showcase-check` and `site-fix`.

/// Every check passed (or the repair completed).
pub const OK: i32 = 0;
/// At least one check evaluated false.
pub const FAILED: i32 = 1;
/// Input file missing or unreadable, invalid table or config, unknown table id.
pub const INVALID: i32 = 2;
