//! score-keeper: headless host for the high-score store.
//!
//! Plays the part of the game's menu and lifecycle glue: initializes the
//! keeper at start, drives score queries and updates, persists on quit.
//!
//! Usage:
//!   score-keeper
//!   score-keeper --player Alice --score 120
//!   score-keeper --data-dir ./saves --ipc-mode

use anyhow::Result;
use highscore_core::{
    config::StorageConfig,
    keeper::{LoadStatus, ScoreKeeper},
    service::ScoreService,
    types::Score,
};
use std::env;
use std::io::{self, BufRead, Write};

/// Name used when the player leaves the name field blank.
const DEFAULT_PLAYER_NAME: &str = "NoNamePlayer";

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    SetPlayer {
        player_name: String,
    },
    RecordScore {
        score: Score,
    },
    UpdateBestScore {
        player_name: String,
        score:       Score,
    },
    GetBestScore {
        player_name: String,
    },
    Save,
    Reload,
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    current_player:    String,
    high_score_player: String,
    high_score:        Score,
    players:           usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated:           Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_score:        Option<Score>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let player = string_arg(&args, "--player");
    let score = args
        .windows(2)
        .find(|w| w[0] == "--score")
        .map(|w| w[1].parse::<Score>())
        .transpose()?;

    let config = match string_arg(&args, "--data-dir") {
        Some(dir) => StorageConfig::in_dir(dir),
        None => StorageConfig::platform_default()?,
    };

    let mut keeper = ScoreKeeper::initialize(&config)?;
    keeper.set_current_player_name(player_name_or_default(player.as_deref().unwrap_or("")));

    if ipc_mode {
        run_ipc_loop(&mut keeper, io::stdin().lock(), io::stdout())?;
    } else {
        run_once(&mut keeper, score)?;
    }

    Ok(())
}

fn run_once(keeper: &mut ScoreKeeper, score: Option<Score>) -> Result<()> {
    println!("score-keeper");
    println!("  settings:  {}", keeper.settings_path().display());
    println!("  status:    {}", describe_status(keeper.load_status()));
    println!("  {}", keeper.get_high_score());

    if let Some(score) = score {
        let player = keeper.current_player_name().to_string();
        let previous = keeper.get_best_score(&player);
        if keeper.record_score(score) {
            println!("  new best for {player}: {score} (was {previous})");
        } else {
            println!("  {player} scored {score}; best stays {previous}");
        }
        println!("  {}", keeper.get_high_score());
    }

    keeper.persist()?;
    Ok(())
}

/// Serve IPC commands until `quit`, EOF or an I/O error, then persist.
/// The save runs on every one of those exits, so a broken pipe never
/// costs the scores recorded since the last `save`.
fn run_ipc_loop<R: BufRead, W: Write>(
    keeper: &mut ScoreKeeper,
    input: R,
    output: W,
) -> Result<()> {
    let served = serve_commands(keeper, input, output);
    let persisted = keeper.persist();
    served?;
    persisted?;
    Ok(())
}

fn serve_commands<R: BufRead, W: Write>(
    keeper: &mut ScoreKeeper,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut bytes = Vec::new();

    loop {
        bytes.clear();
        let bytes_read = input.read_until(b'\n', &mut bytes)?;
        if bytes_read == 0 {
            break; // EOF
        }
        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line,
            Err(e) => {
                write_error(&mut output, &e.to_string())?;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(line) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut output, &e.to_string())?;
                continue;
            }
        };

        let mut state = build_ui_state(keeper);
        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::SetPlayer { player_name } => {
                keeper.set_current_player_name(player_name_or_default(&player_name));
                state = build_ui_state(keeper);
            }
            IpcCommand::RecordScore { score } => {
                let updated = keeper.record_score(score);
                state = build_ui_state(keeper);
                state.updated = Some(updated);
            }
            IpcCommand::UpdateBestScore { player_name, score } => {
                let updated = keeper.update_best_score(&player_name, score);
                state = build_ui_state(keeper);
                state.updated = Some(updated);
            }
            IpcCommand::GetBestScore { player_name } => {
                state.best_score = Some(keeper.get_best_score(&player_name));
            }
            IpcCommand::Save => {
                if let Err(e) = keeper.persist() {
                    log::error!("Save failed: {e}");
                    write_error(&mut output, &e.to_string())?;
                    continue;
                }
            }
            IpcCommand::Reload => {
                if let Err(e) = keeper.reload() {
                    log::error!("Reload failed: {e}");
                    write_error(&mut output, &e.to_string())?;
                    continue;
                }
                state = build_ui_state(keeper);
            }
        }
        writeln!(output, "{}", serde_json::to_string(&state)?)?;
        output.flush()?;
    }
    Ok(())
}

fn build_ui_state(keeper: &ScoreKeeper) -> UiState {
    let high = keeper.get_high_score();
    UiState {
        current_player:    keeper.current_player_name().to_string(),
        high_score_player: high.player_name,
        high_score:        high.score,
        players:           keeper.store().len(),
        updated:           None,
        best_score:        None,
    }
}

fn write_error<W: Write>(output: &mut W, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(output, "{}", err_json)?;
    output.flush()?;
    Ok(())
}

fn describe_status(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Restored { records } => format!("restored {records} player(s)"),
        LoadStatus::FirstRun => "first run, created new settings".to_string(),
        LoadStatus::RecoveredFromCorrupt { quarantined: Some(p) } => {
            format!("settings were corrupt, moved to {}", p.display())
        }
        LoadStatus::RecoveredFromCorrupt { quarantined: None } => {
            "settings were corrupt, starting fresh".to_string()
        }
    }
}

fn player_name_or_default(name: &str) -> &str {
    if name.is_empty() {
        DEFAULT_PLAYER_NAME
    } else {
        name
    }
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
