//! Epoch-second clock for lifecycle timestamps.
//!
//! Entities carry `created_at`/`updated_at`/`deleted_at` as whole epoch
//! seconds, with `deleted_at == 0` meaning the row is live.

use chrono::Utc;

/// Sentinel value for `deleted_at` on live rows.
pub const NOT_DELETED: i64 = 0;

/// Returns the current time as whole seconds since the Unix epoch.
pub fn epoch_seconds() -> i64 {
    Utc::now().timestamp()
}
