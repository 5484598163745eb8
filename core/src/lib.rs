//! highscore-core: per-player best scores for a single-player game,
//! kept in memory and persisted to a local `settings.json`.
//!
//! Layering, leaves first:
//!   store: insertion-ordered player records
//!   codec: JSON file format, load/save
//!   service: high score / best score queries and the update policy
//!   keeper: the one long-lived instance owning the store and its file

pub mod codec;
pub mod config;
pub mod error;
pub mod keeper;
pub mod service;
pub mod store;
pub mod types;
