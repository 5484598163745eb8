//! Score service: the query/update API over a record store.
//!
//! RULE: `update_best_score` is the only mutation entry point.
//! Everything the game does to scores goes through it, which is what
//! keeps best scores from ever going down.

use crate::{
    store::SettingsStore,
    types::{PlayerName, Score},
};
use std::fmt;

/// The single best record across all players.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighScore {
    pub player_name: PlayerName,
    pub score:       Score,
}

impl fmt::Display for HighScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "High Score: {} : {}", self.player_name, self.score)
    }
}

impl From<HighScore> for (PlayerName, Score) {
    fn from(high: HighScore) -> Self {
        (high.player_name, high.score)
    }
}

pub trait ScoreService {
    /// The record with the highest best score.
    ///
    /// Ties go to the record inserted first. An empty store, or one
    /// where every score is 0, gives `("", 0)`.
    fn get_high_score(&self) -> HighScore;

    /// Best score for `player_name`, or 0 if the name is unknown.
    fn get_best_score(&self, player_name: &str) -> Score;

    /// Record `score` for `player_name`. Returns `true` if this created
    /// the player or beat their previous best.
    fn update_best_score(&mut self, player_name: &str, score: Score) -> bool;
}

impl ScoreService for SettingsStore {
    fn get_high_score(&self) -> HighScore {
        let mut high = HighScore::default();
        for record in self.iter() {
            if record.best_score > high.score {
                high.score = record.best_score;
                high.player_name.clone_from(&record.player_name);
            }
        }
        high
    }

    fn get_best_score(&self, player_name: &str) -> Score {
        self.find_by_name(player_name)
            .map(|p| p.best_score)
            .unwrap_or(0)
    }

    fn update_best_score(&mut self, player_name: &str, score: Score) -> bool {
        self.upsert(player_name, score)
    }
}
