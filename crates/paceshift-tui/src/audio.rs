//! Cue playback through the default audio output
//!
//! A single output stream is opened at startup; each cue is a short sine
//! tone mixed in fire-and-forget, so the caller never waits on the device.
//! The end cue plays at a reduced rate for a lower pitch.

use paceshift_core::cue::{Cue, CuePlayer};
use paceshift_core::{Error, Result};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};
use std::time::Duration;

const TONE_HZ: f32 = 880.0;
const TONE_MILLIS: u64 = 250;

pub struct CueSpeaker {
    // The stream must stay alive for the handle to keep playing.
    output: Option<(OutputStream, OutputStreamHandle)>,
    enabled: bool,
}

impl CueSpeaker {
    pub fn new() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| Error::AudioInit(e.to_string()))?;
        Ok(Self {
            output: Some((stream, handle)),
            enabled: true,
        })
    }

    /// Speaker without a device; every cue is a silent no-op.
    pub fn disabled() -> Self {
        Self {
            output: None,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled && self.output.is_some()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl CuePlayer for CueSpeaker {
    fn play(&self, cue: Cue) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let Some((_, handle)) = &self.output else {
            return Ok(());
        };

        let tone = SineWave::new(TONE_HZ)
            .take_duration(Duration::from_millis(TONE_MILLIS))
            .amplify(0.6)
            .speed(cue.playback_rate());

        handle
            .play_raw(tone)
            .map_err(|e| Error::Playback(e.to_string()))
    }
}
