//! Score repository backing the leaderboard.

use diesel::dsl::sum;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, NewScore, RankedPlayer, Score, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Repository for score rows.
///
/// Connections are opened per call. Use `":memory:"` for an in-memory
/// database (useful for tests).
#[derive(Debug, Clone)]
pub struct ScoreRepository {
    db_path: String,
}

impl ScoreRepository {
    /// Creates a repository for the database at `db_path` and applies any
    /// pending schema migrations, creating the database if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "opening score database");
        let repo = Self { db_path };
        let mut conn = repo.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("migration error: {e}")))?;
        Ok(repo)
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Records one score award for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn save_score(&self, player: &str, score: i32) -> Result<Score, DbError> {
        debug!(player = %player, score, "recording score");
        let mut conn = self.connection()?;

        let row = diesel::insert_into(schema::scores::table)
            .values(NewScore::new(player.to_string(), score))
            .returning(Score::as_returning())
            .get_result(&mut conn)?;

        info!(score_id = row.id(), player = %player, score, "score recorded");
        Ok(row)
    }

    /// The top players ranked by summed score, highest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn top_players(&self, limit: i64) -> Result<Vec<RankedPlayer>, DbError> {
        debug!(limit, "loading leaderboard");
        let mut conn = self.connection()?;

        let rows: Vec<(String, Option<i64>)> = schema::scores::table
            .group_by(schema::scores::player)
            .select((schema::scores::player, sum(schema::scores::score)))
            .order(sum(schema::scores::score).desc())
            .limit(limit)
            .load(&mut conn)?;

        let ranked = rows
            .into_iter()
            .map(|(player, total)| RankedPlayer::new(player, total.unwrap_or(0)))
            .collect::<Vec<_>>();

        info!(count = ranked.len(), "leaderboard loaded");
        Ok(ranked)
    }

    /// Reports whether the database can currently be reached.
    #[instrument(skip(self))]
    pub fn is_available(&self) -> bool {
        match self.connection() {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "score database unavailable");
                false
            }
        }
    }
}
