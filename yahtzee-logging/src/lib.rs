//! yahtzee-logging: NDJSON game events + tracing setup.
//!
//! [`GameRecorder`] is a game listener that appends one JSON object per
//! notification, so a finished log replays the whole game in order.

use std::cell::{Cell, RefCell};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use yahtzee_core::{GameFinishedListener, GameUpdateListener, ScoreGroup, YahtzeeGame};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "YAHTZEE_LOG";

static INIT: Once = Once::new();

/// Install a stderr fmt subscriber filtered by `YAHTZEE_LOG`
/// (e.g. `YAHTZEE_LOG=yahtzee_core=debug`), falling back to `yahtzee=info`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("yahtzee=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("event log I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("event serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEvent {
    pub event: String,
    pub ts_ms: u64,
    pub game_id: u64,
    pub player: String,
    /// 1-based roll within the turn.
    pub roll: u8,
    pub dice: [u8; 5],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub event: String,
    pub ts_ms: u64,
    pub game_id: u64,
    pub player: String,
    pub group: ScoreGroup,
    pub points: i32,
    pub dice: [u8; 5],
    /// Player total after this score, bonus included.
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotal {
    pub player: String,
    pub upper_total: i32,
    pub lower_total: i32,
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishEvent {
    pub event: String,
    pub ts_ms: u64,
    pub game_id: u64,
    pub totals: Vec<PlayerTotal>,
}

/// Writes `roll`, `score` and `finish` events for one game.
///
/// Register the same `Rc<GameRecorder>` as both update and finish listener.
/// Listener callbacks cannot fail, so the first write error is kept and later
/// events are still attempted.
pub struct GameRecorder {
    game_id: u64,
    writer: RefCell<NdjsonWriter>,
    error: RefCell<Option<NdjsonError>>,
    events: Cell<u64>,
}

impl GameRecorder {
    pub fn new(writer: NdjsonWriter, game_id: u64) -> Self {
        Self {
            game_id,
            writer: RefCell::new(writer),
            error: RefCell::new(None),
            events: Cell::new(0),
        }
    }

    pub fn create(path: impl AsRef<Path>, game_id: u64) -> Result<Self, NdjsonError> {
        Ok(Self::new(NdjsonWriter::open_append(path)?, game_id))
    }

    /// Give the writer back, e.g. to record the next game into the same file.
    pub fn into_writer(self) -> NdjsonWriter {
        self.writer.into_inner()
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    /// Events written successfully so far.
    pub fn events_written(&self) -> u64 {
        self.events.get()
    }

    /// Take the first write error, if any.
    pub fn take_error(&self) -> Option<NdjsonError> {
        self.error.borrow_mut().take()
    }

    pub fn flush(&self) -> Result<(), NdjsonError> {
        self.writer.borrow_mut().flush()
    }

    fn record<T: Serialize>(&self, event: &T) {
        match self.writer.borrow_mut().write_event(event) {
            Ok(()) => self.events.set(self.events.get() + 1),
            Err(e) => {
                warn!(game_id = self.game_id, error = %e, "failed to record game event");
                self.keep_error(e);
            }
        }
    }

    fn keep_error(&self, e: NdjsonError) {
        let mut slot = self.error.borrow_mut();
        if slot.is_none() {
            *slot = Some(e);
        }
    }
}

impl GameUpdateListener for GameRecorder {
    fn on_game_updated(&self, game: &YahtzeeGame) {
        let ts_ms = now_ms();
        if let Some(dice) = game.dice_values() {
            self.record(&RollEvent {
                event: "roll".to_string(),
                ts_ms,
                game_id: self.game_id,
                player: game.current_player().name().to_string(),
                roll: game.round_in_turn(),
                dice,
            });
        } else if let Some(last) = game.last_score() {
            self.record(&ScoreEvent {
                event: "score".to_string(),
                ts_ms,
                game_id: self.game_id,
                player: game.players()[last.player].name().to_string(),
                group: last.group,
                points: last.points,
                dice: last.dice,
                total: game.sheets()[last.player].total_score(),
            });
        }
    }
}

impl GameFinishedListener for GameRecorder {
    fn on_game_finished(&self, game: &YahtzeeGame) {
        let totals = game
            .players()
            .iter()
            .zip(game.sheets())
            .map(|(p, s)| PlayerTotal {
                player: p.name().to_string(),
                upper_total: s.upper_total(),
                lower_total: s.lower_total(),
                total: s.total_score(),
            })
            .collect();
        self.record(&FinishEvent {
            event: "finish".to_string(),
            ts_ms: now_ms(),
            game_id: self.game_id,
            totals,
        });
        if let Err(e) = self.flush() {
            warn!(game_id = self.game_id, error = %e, "failed to flush game log");
            self.keep_error(e);
        }
    }
}
