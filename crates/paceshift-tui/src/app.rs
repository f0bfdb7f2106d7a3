//! Application state management

use anyhow::Result;
use chrono::{DateTime, Utc};
use paceshift_core::engine::IntervalEngine;
use paceshift_core::models::{IntervalConfig, Mode, Phase};

use crate::audio::CueSpeaker;
use crate::ui::theme::theme_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    ConfirmQuit,
}

pub struct App {
    pub engine: IntervalEngine<CueSpeaker>,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: String,

    // Last observed mode, for announcing natural transitions.
    last_mode: Mode,
}

impl App {
    pub fn new(mute: bool) -> Result<Self> {
        let speaker = match CueSpeaker::new() {
            Ok(mut speaker) => {
                if mute {
                    speaker.set_enabled(false);
                }
                speaker
            }
            Err(e) => {
                tracing::warn!("Audio output unavailable, cues disabled: {}", e);
                CueSpeaker::disabled()
            }
        };

        let engine = IntervalEngine::new(IntervalConfig::default(), speaker)?;
        let last_mode = engine.session().mode;

        Ok(Self {
            engine,
            input_mode: InputMode::Normal,
            show_help: false,
            should_quit: false,
            status_message: String::new(),
            last_mode,
        })
    }

    pub fn toggle_timer(&mut self) {
        if self.engine.session().is_active {
            self.engine.pause();
            self.status_message = "Paused".to_string();
        } else {
            self.engine.start(Utc::now());
            self.status_message = "Walking!".to_string();
        }
    }

    pub fn skip_interval(&mut self) {
        self.engine.skip_to_next(Utc::now());

        let session = self.engine.session();
        let theme = theme_for(session.phase, session.mode);
        self.status_message = format!("Skipped to: {}", theme.label);

        // A manual skip is not announced as a natural phase change.
        self.last_mode = session.mode;
    }

    pub fn toggle_cues(&mut self) {
        let speaker = self.engine.cues_mut();
        let enabled = !speaker.is_enabled();
        speaker.set_enabled(enabled);
        self.status_message = if enabled {
            "Audio cues on".to_string()
        } else {
            "Audio cues muted".to_string()
        };
    }

    /// Advance the engine and surface any phase boundary it crossed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.engine.tick(now);

        let session = self.engine.session();
        let (phase, mode) = (session.phase, session.mode);

        if mode == Mode::Transitioning && self.last_mode == Mode::Running {
            self.status_message = "Get ready...".to_string();
        } else if mode == Mode::Running && self.last_mode == Mode::Transitioning {
            let theme = theme_for(phase, mode);
            self.status_message = format!("{}! {}", theme.label, theme.sub_label);
            send_phase_notification(phase);
        }

        self.last_mode = mode;
    }
}

fn send_phase_notification(phase: Phase) {
    let (title, body) = match phase {
        Phase::Slow => ("🚶 Walk Slow", "Recover and breathe."),
        Phase::Fast => ("🏃 Walk Fast", "Push the pace!"),
    };

    if let Err(e) = notify_rust::Notification::new()
        .summary(title)
        .body(body)
        .icon("clock")
        .timeout(notify_rust::Timeout::Milliseconds(5000))
        .show()
    {
        tracing::error!("Failed to send notification: {}", e);
    }
}
