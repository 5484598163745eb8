//! The score keeper: the one long-lived owner of the player records.
//!
//! LIFECYCLE (driven by the host application, never implicit):
//!   1. `initialize()` at program start: load the settings file, or
//!      create it on first run.
//!   2. Score queries and updates during play, through `ScoreService`.
//!   3. `persist()` at quit or any checkpoint. Safe to call repeatedly.
//!
//! RULES:
//!   - Exactly one keeper per process, passed by reference to whoever
//!     needs scores. There is no global instance.
//!   - No internal locking. Callers on several threads must serialize
//!     access themselves.
//!   - A corrupt settings file is never fatal: it is moved aside and
//!     play continues from an empty store.

use crate::{
    codec::{self, Loaded},
    config::StorageConfig,
    error::{ScoreError, ScoreResult},
    service::{HighScore, ScoreService},
    store::SettingsStore,
    types::{PlayerName, Score},
};
use std::path::{Path, PathBuf};

/// How the keeper's current store came to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// An existing settings file was read.
    Restored { records: usize },
    /// No settings file existed; a fresh one was written.
    FirstRun,
    /// The settings file did not decode. `quarantined` is where the bad
    /// file was moved, or `None` if it could not be moved (in which case
    /// it is left in place until the next `persist()`).
    RecoveredFromCorrupt { quarantined: Option<PathBuf> },
}

#[derive(Debug)]
pub struct ScoreKeeper {
    store:               SettingsStore,
    settings_path:       PathBuf,
    load_status:         LoadStatus,
    current_player_name: PlayerName,
}

impl ScoreKeeper {
    /// Load (or create) the settings file described by `config`.
    pub fn initialize(config: &StorageConfig) -> ScoreResult<Self> {
        Self::initialize_at(config.settings_path())
    }

    /// Load (or create) the settings file at an explicit path.
    pub fn initialize_at(settings_path: impl Into<PathBuf>) -> ScoreResult<Self> {
        let settings_path = settings_path.into();
        let (store, load_status) = load_or_recover(&settings_path)?;
        Ok(Self {
            store,
            settings_path,
            load_status,
            current_player_name: PlayerName::new(),
        })
    }

    /// Write the current records to disk. On failure the in-memory
    /// records stay valid; the next successful call makes them durable.
    pub fn persist(&self) -> ScoreResult<()> {
        codec::save(&self.settings_path, &self.store)
    }

    /// Throw away the in-memory records and load them again from disk.
    /// The current player name is kept.
    pub fn reload(&mut self) -> ScoreResult<&LoadStatus> {
        let (store, load_status) = load_or_recover(&self.settings_path)?;
        self.store = store;
        self.load_status = load_status;
        Ok(&self.load_status)
    }

    /// Record a finished game for the current player.
    pub fn record_score(&mut self, score: Score) -> bool {
        self.store.update_best_score(&self.current_player_name, score)
    }

    pub fn current_player_name(&self) -> &str {
        &self.current_player_name
    }

    pub fn set_current_player_name(&mut self, player_name: impl Into<PlayerName>) {
        self.current_player_name = player_name.into();
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }
}

impl ScoreService for ScoreKeeper {
    fn get_high_score(&self) -> HighScore {
        self.store.get_high_score()
    }

    fn get_best_score(&self, player_name: &str) -> Score {
        self.store.get_best_score(player_name)
    }

    fn update_best_score(&mut self, player_name: &str, score: Score) -> bool {
        self.store.update_best_score(player_name, score)
    }
}

fn load_or_recover(path: &Path) -> ScoreResult<(SettingsStore, LoadStatus)> {
    match codec::load(path) {
        Ok(Loaded { store, first_run: false }) => {
            let records = store.len();
            Ok((store, LoadStatus::Restored { records }))
        }
        Ok(Loaded { store, first_run: true }) => {
            log::warn!("Settings file not found at {}. Creating a new one.", path.display());
            codec::save(path, &store)?;
            Ok((store, LoadStatus::FirstRun))
        }
        Err(ScoreError::CorruptState { path, source }) => {
            log::error!(
                "Settings file {} is corrupt ({source}); starting from empty scores",
                path.display()
            );
            let store = SettingsStore::new();
            let quarantined = match codec::quarantine(&path) {
                Ok(moved) => {
                    codec::save(&path, &store)?;
                    Some(moved)
                }
                Err(e) => {
                    log::error!("Could not move corrupt settings aside: {e}");
                    None
                }
            };
            Ok((store, LoadStatus::RecoveredFromCorrupt { quarantined }))
        }
        Err(e) => Err(e),
    }
}
