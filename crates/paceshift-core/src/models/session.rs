//! Interval session state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The current walking intensity segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Slow,
    Fast,
}

impl Phase {
    pub fn flip(&self) -> Self {
        match self {
            Phase::Slow => Phase::Fast,
            Phase::Fast => Phase::Slow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Slow => "Slow",
            Phase::Fast => "Fast",
        }
    }
}

/// Whether the engine is counting down a phase or the fixed pause between
/// phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Running,
    Transitioning,
}

/// Full engine state for one interval session.
///
/// Invariant: `deadline` is `Some` exactly when `is_active` is true. While
/// active, `remaining_seconds` is derived from `deadline`; while paused it
/// holds the last computed value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntervalSession {
    pub phase: Phase,
    pub mode: Mode,
    pub is_active: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub remaining_seconds: u64,
}

impl IntervalSession {
    pub fn new(interval_seconds: u64) -> Self {
        Self {
            phase: Phase::Slow,
            mode: Mode::Running,
            is_active: false,
            deadline: None,
            remaining_seconds: interval_seconds,
        }
    }

    pub fn is_paused(&self) -> bool {
        !self.is_active
    }

    pub fn is_transitioning(&self) -> bool {
        self.mode == Mode::Transitioning
    }
}
