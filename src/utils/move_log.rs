//! Injected move-transcript sink.
//!
//! The core never logs on its own; drivers that want a record inject a
//! `MoveSink` and feed it every applied move. `TranscriptLog` keeps a
//! timestamped in-memory transcript; `NullSink` discards everything.

use chrono::{DateTime, Utc};
use std::fmt::Write as _;

use crate::board::player::Player;
use crate::board::square::Square;

pub trait MoveSink {
    fn record_move(&mut self, player: Player, from: Square, to: Square);
}

/// Sink that drops every notification.
pub struct NullSink;

impl MoveSink for NullSink {
    fn record_move(&mut self, _player: Player, _from: Square, _to: Square) {}
}

#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub at: DateTime<Utc>,
    pub player: Player,
    pub from: Square,
    pub to: Square,
}

/// In-memory transcript of applied moves, one timestamped entry per move.
#[derive(Debug, Clone, Default)]
pub struct TranscriptLog {
    entries: Vec<TranscriptEntry>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// One line per move: timestamp, mover, origin and destination.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "{} {} {} {}",
                entry.at.format("%H:%M:%S%.3f"),
                entry.player,
                entry.from,
                entry.to
            );
        }
        out
    }
}

impl MoveSink for TranscriptLog {
    fn record_move(&mut self, player: Player, from: Square, to: Square) {
        self.entries.push(TranscriptEntry {
            at: Utc::now(),
            player,
            from,
            to,
        });
    }
}
