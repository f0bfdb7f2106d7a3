//! Phase themes
//!
//! Two themes keyed by phase plus one overlay theme for the transition
//! pause. The render layer looks these up once per frame.

use paceshift_core::models::{Mode, Phase};
use ratatui::style::Color;

pub struct PhaseTheme {
    pub label: &'static str,
    pub sub_label: &'static str,
    pub icon: &'static str,
    pub primary: Color,
    pub accent: Color,
}

pub const SLOW: PhaseTheme = PhaseTheme {
    label: "Walk Slow",
    sub_label: "Recover & Breathe",
    icon: "🚶",
    primary: Color::Blue,
    accent: Color::Cyan,
};

pub const FAST: PhaseTheme = PhaseTheme {
    label: "Walk Fast",
    sub_label: "Push the Pace",
    icon: "🏃",
    primary: Color::Red,
    accent: Color::Magenta,
};

pub const TRANSITION: PhaseTheme = PhaseTheme {
    label: "Get Ready",
    sub_label: "Switching...",
    icon: "⏳",
    primary: Color::DarkGray,
    accent: Color::Gray,
};

pub fn theme_for(phase: Phase, mode: Mode) -> &'static PhaseTheme {
    match (mode, phase) {
        (Mode::Transitioning, _) => &TRANSITION,
        (Mode::Running, Phase::Slow) => &SLOW,
        (Mode::Running, Phase::Fast) => &FAST,
    }
}
