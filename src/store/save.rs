//! Game snapshots and their on-disk JSON encoding.
//!
//! The engine knows nothing about files; snapshots are captured through its
//! read-only accessors and applied back through the restore contract.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::game::{Board, GameMode, Symbol};
use crate::service::GameService;
use crate::store::error::SaveError;

/// Per-seat data carried in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct SavedPlayer {
    name: String,
    score: i32,
}

/// A full snapshot of a round: everything needed to resume it later.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct SavedGame {
    board: Board,
    mode: GameMode,
    next_symbol: Symbol,
    player_one: SavedPlayer,
    player_two: SavedPlayer,
    saved_at: DateTime<Utc>,
}

impl SavedGame {
    /// Captures the current state of `service`.
    pub fn capture(service: &GameService) -> Self {
        Self {
            board: service.board().clone(),
            mode: service.mode(),
            next_symbol: service.current_player().symbol(),
            player_one: SavedPlayer::new(
                service.player_one().name().to_string(),
                service.player_one().score(),
            ),
            player_two: SavedPlayer::new(
                service.player_two().name().to_string(),
                service.player_two().score(),
            ),
            saved_at: Utc::now(),
        }
    }

    /// Rebuilds a round from this snapshot: a fresh service for the saved
    /// mode, seats renamed and rescored, the turn handed back, and the board
    /// copied in with the status reconciled against it.
    pub fn restore(&self) -> GameService {
        let mut service = GameService::new(self.mode);
        service.player_one_mut().set_name(&self.player_one.name);
        service.player_one_mut().set_score(self.player_one.score);
        service.player_two_mut().set_name(&self.player_two.name);
        service.player_two_mut().set_score(self.player_two.score);
        service.set_turn(self.next_symbol);
        service.restore_board(&self.board);
        service
    }
}

/// Handle to one on-disk save location.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    /// Creates a handle for `path`. Nothing is touched on disk until a save
    /// or load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The save location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when a non-empty save exists at the path.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.path).map(|meta| meta.len() > 0).unwrap_or(false)
    }

    /// Writes `snapshot` to the save location, replacing any previous save.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] when the snapshot cannot be encoded or the file
    /// cannot be written.
    #[instrument(skip(self, snapshot), fields(path = %self.path.display()))]
    pub fn save(&self, snapshot: &SavedGame) -> Result<(), SaveError> {
        let encoded = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, encoded)?;
        info!("game state saved");
        Ok(())
    }

    /// Reads a snapshot back from the save location.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] when the file is missing, unreadable, or not a
    /// valid snapshot.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<SavedGame, SaveError> {
        let contents = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&contents)?;
        debug!("snapshot decoded");
        Ok(snapshot)
    }
}
