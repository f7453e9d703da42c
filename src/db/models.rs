//! Database models for the score table.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// One recorded score award.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::scores)]
pub struct Score {
    id: i32,
    player: String,
    score: i32,
    created_at: NaiveDateTime,
}

/// Insertable score row; `created_at` defaults in the database.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::scores)]
pub struct NewScore {
    player: String,
    score: i32,
}

/// One leaderboard entry: a player and the sum of all their awards.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct RankedPlayer {
    player: String,
    total_score: i64,
}
