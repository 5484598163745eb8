//! In-memory record store: player name → best score.
//!
//! RULE: At most one record per name. Names compare by exact equality.
//! RULE: A record's best score never decreases. `upsert` is the only
//!       mutation and it only ever raises a score.
//!
//! Records keep insertion order. Order is not used for lookups but it
//! decides high-score tie-breaks and is what gets written to disk.

use crate::types::{PlayerName, Score};
use serde::{Deserialize, Serialize};

/// One player's best score. Field names match the persisted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub player_name: PlayerName,
    pub best_score:  Score,
}

impl PlayerRecord {
    pub fn new(player_name: impl Into<PlayerName>, best_score: Score) -> Self {
        Self { player_name: player_name.into(), best_score }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    players: Vec<PlayerRecord>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from decoded records, in the given order.
    ///
    /// A repeated name is folded into its first occurrence, keeping
    /// the larger score, so the one-record-per-name rule holds even
    /// for hand-edited files.
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            match store.position(&record.player_name) {
                Some(idx) => {
                    log::warn!(
                        "Duplicate player record '{}' in settings; keeping the higher score",
                        record.player_name
                    );
                    let existing = &mut store.players[idx];
                    existing.best_score = existing.best_score.max(record.best_score);
                }
                None => store.players.push(record),
            }
        }
        store
    }

    pub fn find_by_name(&self, player_name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.player_name == player_name)
    }

    /// Insert or raise a player's best score.
    ///
    /// Unseen name: appends a record and returns `true`.
    /// Known name: returns `true` only if `score` beats the stored
    /// value, otherwise leaves the record untouched and returns `false`.
    pub fn upsert(&mut self, player_name: &str, score: Score) -> bool {
        match self.position(player_name) {
            Some(idx) => {
                let record = &mut self.players[idx];
                if score > record.best_score {
                    record.best_score = score;
                    true
                } else {
                    false
                }
            }
            None => {
                self.players.push(PlayerRecord::new(player_name, score));
                true
            }
        }
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn position(&self, player_name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.player_name == player_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_appends_unseen_names_in_order() {
        let mut store = SettingsStore::new();
        assert!(store.upsert("Alice", 100));
        assert!(store.upsert("Bob", 0));
        assert!(store.upsert("Carol", 50));

        let names: Vec<&str> = store.iter().map(|p| p.player_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn upsert_only_raises_existing_scores() {
        let mut store = SettingsStore::new();
        store.upsert("Alice", 100);

        assert!(!store.upsert("Alice", 90), "Lower score must not update");
        assert!(!store.upsert("Alice", 100), "Equal score must not update");
        assert_eq!(store.find_by_name("Alice").unwrap().best_score, 100);

        assert!(store.upsert("Alice", 101));
        assert_eq!(store.find_by_name("Alice").unwrap().best_score, 101);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn names_compare_exactly() {
        let mut store = SettingsStore::new();
        store.upsert("alice", 10);
        store.upsert("Alice", 20);
        store.upsert(" Alice", 30);

        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_name("alice").unwrap().best_score, 10);
        assert!(store.find_by_name("ALICE").is_none());
    }

    #[test]
    fn empty_name_is_a_valid_key() {
        let mut store = SettingsStore::new();
        assert!(store.upsert("", 5));
        assert!(!store.upsert("", 5));
        assert_eq!(store.find_by_name("").unwrap().best_score, 5);
    }

    #[test]
    fn from_records_folds_duplicates_into_first_position() {
        let store = SettingsStore::from_records(vec![
            PlayerRecord::new("Alice", 10),
            PlayerRecord::new("Bob", 20),
            PlayerRecord::new("Alice", 40),
            PlayerRecord::new("Bob", 5),
        ]);

        assert_eq!(
            store.records(),
            &[PlayerRecord::new("Alice", 40), PlayerRecord::new("Bob", 20)]
        );
    }
}
