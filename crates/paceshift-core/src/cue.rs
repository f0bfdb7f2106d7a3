//! Audio cue capability
//!
//! The engine requests cues through the [`CuePlayer`] trait; playback
//! backends live with the front end so the state machine never touches a
//! device handle.

use crate::Result;
use serde::{Deserialize, Serialize};

/// A short audio signal marking a phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Played when a phase begins (and on manual start, doubling as the
    /// audio-unlock gesture on hosts that need one).
    Start,
    /// Played when a phase ends, just before the transition pause.
    End,
}

impl Cue {
    /// Playback rate relative to the base tone. The end cue is slowed for
    /// a perceptibly lower pitch, so one tone yields two distinct signals.
    pub fn playback_rate(&self) -> f32 {
        match self {
            Cue::Start => 1.0,
            Cue::End => 0.6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Start => "start",
            Cue::End => "end",
        }
    }
}

pub trait CuePlayer {
    /// Request a cue. Must not block: implementations hand the sound to
    /// their own mixer and return immediately.
    fn play(&self, cue: Cue) -> Result<()>;
}

/// No-op player used when audio is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, _cue: Cue) -> Result<()> {
        Ok(())
    }
}
