// Debug logging module for asynchronous half-turn logging
//
// Each half-turn's decision is written to a JSONL file through tokio's
// async file API; the replay tool reads the file back.

use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::game::HalfTurn;
use crate::state::GameState;
use crate::types::{Mover, Position};

/// Represents a single debug log entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DebugLogEntry {
    pub turn: u32,
    pub mover: Mover,
    /// State the mover searched from
    pub state: GameState,
    pub chosen_move: Position,
    pub score: i32,
    pub depth: u8,
    pub timestamp: String,
}

impl DebugLogEntry {
    pub fn from_half_turn(half_turn: &HalfTurn, depth: u8) -> Self {
        DebugLogEntry {
            turn: half_turn.turn,
            mover: half_turn.mover,
            state: half_turn.before,
            chosen_move: half_turn.to,
            score: half_turn.score,
            depth,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Shared debug logger state
/// Uses Arc<Mutex<File>> so clones handed to other tasks share one file
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Appends one half-turn to the log
    ///
    /// Awaited by the turn loop so entries stay in play order.
    pub async fn log_half_turn(&self, half_turn: &HalfTurn, depth: u8) {
        if !self.enabled {
            return;
        }
        let entry = DebugLogEntry::from_half_turn(half_turn, depth);
        Self::write_entry(self.file.clone(), entry).await;
    }

    async fn write_entry(file_handle: Arc<Mutex<Option<File>>>, entry: DebugLogEntry) {
        let mut file_guard = file_handle.lock().await;

        if let Some(file) = file_guard.as_mut() {
            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    let line_with_newline = format!("{}\n", json_line);
                    if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                        error!("Failed to write debug log entry: {}", e);
                    } else if let Err(e) = file.flush().await {
                        error!("Failed to flush debug log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize debug log entry: {}", e);
                }
            }
        }
    }
}
