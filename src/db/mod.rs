//! Database persistence layer for the score leaderboard.

mod error;
mod models;
mod repository;
mod schema;

pub use error::DbError;
pub use models::{NewScore, RankedPlayer, Score};
pub use repository::ScoreRepository;
