//! Per-user balance model.

use serde::Serialize;
use uuid::Uuid;

/// Balance every account starts with.
pub const STARTING_MONEY: i64 = 100;

/// Represents a stats record from the database.
///
/// # Database Table
///
/// Maps to the `stats` table. Exactly one row exists per user and shares
/// the user's `id`; both rows are written in the same transaction.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Stats {
    /// Same value as `User::id`
    pub id: Uuid,

    /// Current balance
    pub money: i64,
}

/// Response body for the stats endpoint.
///
/// # JSON Example
///
/// ```json
/// { "money": 100 }
/// ```
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub money: i64,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self { money: stats.money }
    }
}
