//! Settings file codec: the record store to/from `settings.json`.
//!
//! File shape (field names fixed for compatibility with existing saves):
//!
//! ```json
//! {
//!   "players": [
//!     { "playerName": "Alice", "bestScore": 100 }
//!   ]
//! }
//! ```
//!
//! RULE: Only this module touches the settings file on disk.
//!
//! Decoding is lenient only at the document level: a missing `players`
//! key means no players yet. Each record must carry both `playerName`
//! and `bestScore`. A record without them is damage, not a player with
//! a default score, so the whole file loads as `CorruptState` and gets
//! quarantined instead of silently inventing a 0 score or an empty name.

use crate::{
    error::{ScoreError, ScoreResult},
    store::{PlayerRecord, SettingsStore},
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    players: Vec<PlayerRecord>,
}

#[derive(Debug, Serialize)]
struct SettingsFileRef<'a> {
    players: &'a [PlayerRecord],
}

/// Result of reading the settings path.
#[derive(Debug)]
pub struct Loaded {
    pub store:     SettingsStore,
    /// No file existed. The caller should save right away so the
    /// file exists for the next load.
    pub first_run: bool,
}

/// Read the store at `path`.
///
/// Missing file is not an error: returns an empty store with
/// `first_run` set. A file that exists but does not decode fails
/// with `CorruptState`.
pub fn load(path: &Path) -> ScoreResult<Loaded> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(Loaded { store: SettingsStore::new(), first_run: true });
        }
        Err(source) => {
            return Err(ScoreError::Read { path: path.to_path_buf(), source });
        }
    };

    let store = decode(&bytes).map_err(|source| ScoreError::CorruptState {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} player record(s) from {}", store.len(), path.display());
    Ok(Loaded { store, first_run: false })
}

/// Write `store` to `path`, replacing whatever was there.
///
/// Missing parent directories are created. The bytes go to a temp file
/// in the same directory which is then renamed over `path`, so an
/// interrupted write never leaves a truncated settings file behind.
///
/// An existing file's permissions carry over to the replacement. A file
/// created by the first save gets the temp file's owner-only mode.
pub fn save(path: &Path, store: &SettingsStore) -> ScoreResult<()> {
    let json = encode(store)?;
    let persistence = |source: io::Error| ScoreError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(persistence)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(persistence)?;
    temp.write_all(json.as_bytes()).map_err(persistence)?;
    temp.as_file().sync_all().map_err(persistence)?;
    if let Ok(existing) = fs::metadata(path) {
        fs::set_permissions(temp.path(), existing.permissions()).map_err(persistence)?;
    }
    temp.persist(path).map_err(|e| persistence(e.error))?;

    log::info!("Saved {} player record(s) to {}", store.len(), path.display());
    Ok(())
}

/// Move a corrupt settings file aside as
/// `<name>.corrupt-<UTC timestamp>` and return its new path.
///
/// Never replaces an earlier quarantined file: if the name is taken,
/// a `.1`, `.2`, ... suffix is added.
pub fn quarantine(path: &Path) -> ScoreResult<PathBuf> {
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.fZ");
    let mut base = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    base.push(format!(".corrupt-{stamp}"));

    let mut target = path.with_file_name(&base);
    let mut suffix = 1u32;
    while target.exists() {
        let mut candidate = base.clone();
        candidate.push(format!(".{suffix}"));
        target = path.with_file_name(candidate);
        suffix += 1;
    }

    fs::rename(path, &target).map_err(|source| ScoreError::Persistence {
        path: target.clone(),
        source,
    })?;
    log::warn!("Moved corrupt settings file to {}", target.display());
    Ok(target)
}

/// Decode the settings JSON. A document without a `players` key is
/// an empty store; anything else off-shape is an error.
pub fn decode(bytes: &[u8]) -> Result<SettingsStore, serde_json::Error> {
    let file: SettingsFile = serde_json::from_slice(bytes)?;
    Ok(SettingsStore::from_records(file.players))
}

/// Pretty-printed settings JSON for `store`.
pub fn encode(store: &SettingsStore) -> ScoreResult<String> {
    let file = SettingsFileRef { players: store.records() };
    Ok(serde_json::to_string_pretty(&file)?)
}
