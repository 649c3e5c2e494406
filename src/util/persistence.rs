use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::{Board, Preferences};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "MetricCards";
const APP_NAME: &str = "MetricCards";

const PREFERENCES_FILE: &str = "preferences.json";
const BOARD_FILE: &str = "board.json";

fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn board_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(BOARD_FILE))
}

fn preferences_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(PREFERENCES_FILE))
}

/// Saved preferences, or defaults when none exist or the file is unreadable.
pub fn load_preferences() -> Preferences {
    let Some(path) = preferences_path() else {
        return Preferences::default();
    };
    match fs::read_to_string(&path) {
        Ok(data) => parse_preferences(&data).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable preferences");
            Preferences::default()
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Preferences::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to read preferences");
            Preferences::default()
        }
    }
}

pub fn save_preferences(preferences: &Preferences) -> Result<(), PersistError> {
    let path = preferences_path().ok_or(PersistError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(preferences)?;
    fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "saved preferences");
    Ok(())
}

/// The board from `board.json`, or the sample board when there is none.
pub fn load_board() -> Board {
    let Some(path) = board_path() else {
        return Board::sample();
    };
    match read_board(&path) {
        Ok(board) => {
            tracing::info!(path = %path.display(), cards = board.cards.len(), "loaded board");
            board
        }
        Err(BoardLoadError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no board file, using sample board");
            Board::sample()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to sample board");
            Board::sample()
        }
    }
}

pub fn read_board(path: &Path) -> Result<Board, BoardLoadError> {
    let data = fs::read_to_string(path)?;
    Ok(parse_board(&data)?)
}

pub fn parse_board(data: &str) -> Result<Board, SerdeError> {
    serde_json::from_str(data)
}

pub fn parse_preferences(data: &str) -> Result<Preferences, SerdeError> {
    serde_json::from_str(data)
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[derive(Debug, thiserror::Error)]
pub enum BoardLoadError {
    #[error("failed to read board file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid board file: {0}")]
    Serde(#[from] SerdeError),
}
