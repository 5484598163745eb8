//! Score service tests: update policy, best score and high score queries.

use highscore_core::{
    service::{HighScore, ScoreService},
    store::SettingsStore,
};

#[test]
fn alice_and_bob_scenario() {
    let mut store = SettingsStore::new();

    assert!(store.update_best_score("Alice", 100));
    assert!(store.update_best_score("Bob", 150));
    assert!(!store.update_best_score("Alice", 90));

    assert_eq!(
        store.get_high_score(),
        HighScore { player_name: "Bob".to_string(), score: 150 }
    );
    assert_eq!(store.get_best_score("Alice"), 100);
}

/// Whatever order scores arrive in, the stored best is the max submitted.
#[test]
fn best_score_is_max_of_submissions() {
    let sequences: &[&[u32]] = &[
        &[0],
        &[5, 3, 9, 1],
        &[10, 10, 10],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[0, u32::MAX, 7],
    ];

    for seq in sequences {
        let mut store = SettingsStore::new();
        for &score in seq.iter() {
            store.update_best_score("Player", score);
        }
        let expected = seq.iter().copied().max().unwrap();
        assert_eq!(
            store.get_best_score("Player"),
            expected,
            "Best score wrong for sequence {seq:?}"
        );
    }
}

#[test]
fn unseen_name_always_updates() {
    let mut store = SettingsStore::new();
    assert!(store.update_best_score("Zero", 0));
    assert!(store.update_best_score("Big", u32::MAX));
    assert!(store.update_best_score("", 1));
}

#[test]
fn non_improving_update_changes_nothing() {
    let mut store = SettingsStore::new();
    store.update_best_score("Alice", 100);
    store.update_best_score("Bob", 40);
    let before = store.clone();

    for score in [0, 1, 99, 100] {
        assert!(
            !store.update_best_score("Alice", score),
            "Score {score} must not beat 100"
        );
    }
    assert_eq!(store, before);
}

#[test]
fn high_score_tracks_the_running_leader() {
    let mut store = SettingsStore::new();
    assert_eq!(store.get_high_score(), HighScore::default());

    store.update_best_score("Alice", 30);
    assert_eq!(store.get_high_score().player_name, "Alice");

    store.update_best_score("Bob", 30);
    assert_eq!(store.get_high_score().player_name, "Alice", "Tie keeps first inserted");

    store.update_best_score("Bob", 31);
    assert_eq!(store.get_high_score().player_name, "Bob");
    assert_eq!(store.get_high_score().score, 31);
}
