//! Interval timer engine
//!
//! Alternates Slow and Fast walking phases through a fixed-length
//! transition pause. The countdown is anchored to an absolute wall-clock
//! deadline, never decremented per tick, so irregular tick scheduling
//! cannot drift the remaining time. Commands take an explicit `now` which
//! keeps the state machine deterministic under test.

use chrono::{DateTime, Duration, Utc};

use crate::cue::{Cue, CuePlayer};
use crate::models::{IntervalConfig, IntervalSession, Mode};
use crate::Result;

pub struct IntervalEngine<C: CuePlayer> {
    session: IntervalSession,
    config: IntervalConfig,
    cues: C,
}

impl<C: CuePlayer> IntervalEngine<C> {
    pub fn new(config: IntervalConfig, cues: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            session: IntervalSession::new(config.interval_seconds),
            config,
            cues,
        })
    }

    pub fn session(&self) -> &IntervalSession {
        &self.session
    }

    pub fn config(&self) -> &IntervalConfig {
        &self.config
    }

    pub fn cues(&self) -> &C {
        &self.cues
    }

    pub fn cues_mut(&mut self) -> &mut C {
        &mut self.cues
    }

    /// Start (or resume) the countdown from the frozen remaining time.
    /// No-op when already active.
    ///
    /// The deadline is computed before the cue request, so a slow audio
    /// backend can never skew the countdown's base timestamp.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.session.is_active {
            return;
        }

        self.session.deadline =
            Some(now + Duration::seconds(self.session.remaining_seconds as i64));
        self.session.is_active = true;

        tracing::debug!(phase = self.session.phase.as_str(), "timer started");
        self.request_cue(Cue::Start);
    }

    /// Freeze the countdown. The remaining time keeps its last computed
    /// value until the next start. No-op when not active. No cue.
    pub fn pause(&mut self) {
        if !self.session.is_active {
            return;
        }

        self.session.deadline = None;
        self.session.is_active = false;

        tracing::debug!(remaining = self.session.remaining_seconds, "timer paused");
    }

    /// Force an immediate phase flip, bypassing the transition pause.
    /// Callable in any state; does not change `is_active`. A manual skip
    /// plays no cue, unlike a natural completion.
    pub fn skip_to_next(&mut self, now: DateTime<Utc>) {
        self.session.phase = self.session.phase.flip();
        self.session.mode = Mode::Running;
        self.session.remaining_seconds = self.config.interval_seconds;

        if self.session.is_active {
            self.session.deadline =
                Some(now + Duration::seconds(self.config.interval_seconds as i64));
        }

        tracing::debug!(
            phase = self.session.phase.as_str(),
            "skipped to next interval"
        );
    }

    /// Recompute the remaining time from the absolute deadline and run the
    /// completion transition when it reaches zero. Called on a fixed
    /// cadence by the host; only display granularity depends on that
    /// cadence. No-op while paused.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if !self.session.is_active {
            return;
        }
        let Some(deadline) = self.session.deadline else {
            return;
        };

        self.session.remaining_seconds = remaining_until(deadline, now);

        if self.session.remaining_seconds == 0 {
            // Re-arms the deadline immediately, so each crossing completes
            // exactly once.
            self.complete_segment(now);
        }
    }

    fn complete_segment(&mut self, now: DateTime<Utc>) {
        match self.session.mode {
            Mode::Running => {
                // Phase over: cue the end tone and enter the fixed pause.
                self.request_cue(Cue::End);
                self.session.mode = Mode::Transitioning;
                self.session.remaining_seconds = self.config.transition_seconds;
                self.session.deadline =
                    Some(now + Duration::seconds(self.config.transition_seconds as i64));

                tracing::debug!(
                    phase = self.session.phase.as_str(),
                    "interval complete, transitioning"
                );
            }
            Mode::Transitioning => {
                // Pause over: flip phases and arm the next interval.
                self.session.mode = Mode::Running;
                self.session.phase = self.session.phase.flip();
                self.session.remaining_seconds = self.config.interval_seconds;
                self.request_cue(Cue::Start);
                self.session.deadline =
                    Some(now + Duration::seconds(self.config.interval_seconds as i64));

                tracing::debug!(
                    phase = self.session.phase.as_str(),
                    "next interval started"
                );
            }
        }
    }

    fn request_cue(&self, cue: Cue) {
        // Sound is best-effort: a failed cue never stalls the countdown.
        if let Err(e) = self.cues.play(cue) {
            tracing::warn!("Failed to play {} cue: {}", cue.as_str(), e);
        }
    }
}

/// Whole seconds until `deadline`, rounded up, clamped to zero.
fn remaining_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (deadline - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        ((millis + 999) / 1000) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;
    use crate::Error;
    use chrono::TimeZone;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingCuePlayer {
        played: Arc<Mutex<Vec<Cue>>>,
    }

    impl RecordingCuePlayer {
        fn played(&self) -> Vec<Cue> {
            self.played.lock().unwrap().clone()
        }
    }

    impl CuePlayer for RecordingCuePlayer {
        fn play(&self, cue: Cue) -> Result<()> {
            self.played.lock().unwrap().push(cue);
            Ok(())
        }
    }

    struct FailingCuePlayer;

    impl CuePlayer for FailingCuePlayer {
        fn play(&self, _cue: Cue) -> Result<()> {
            Err(Error::Playback("no output device".to_string()))
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn secs(n: i64) -> Duration {
        Duration::seconds(n)
    }

    fn new_engine() -> (IntervalEngine<RecordingCuePlayer>, RecordingCuePlayer) {
        let cues = RecordingCuePlayer::default();
        let engine = IntervalEngine::new(IntervalConfig::default(), cues.clone()).unwrap();
        (engine, cues)
    }

    #[test]
    fn test_initial_state() {
        let (engine, cues) = new_engine();
        let session = engine.session();

        assert_eq!(session.phase, Phase::Slow);
        assert_eq!(session.mode, Mode::Running);
        assert!(!session.is_active);
        assert!(session.deadline.is_none());
        assert_eq!(session.remaining_seconds, 180);
        assert!(cues.played().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = IntervalConfig {
            interval_seconds: 0,
            transition_seconds: 5,
        };
        assert!(IntervalEngine::new(config, RecordingCuePlayer::default()).is_err());
    }

    #[test]
    fn test_start_sets_deadline_and_plays_cue() {
        let (mut engine, cues) = new_engine();

        engine.start(t0());

        let session = engine.session();
        assert!(session.is_active);
        assert_eq!(session.deadline, Some(t0() + secs(180)));
        assert_eq!(cues.played(), vec![Cue::Start]);
    }

    #[test]
    fn test_start_when_active_is_noop() {
        let (mut engine, cues) = new_engine();

        engine.start(t0());
        engine.start(t0() + secs(10));

        // The deadline was not rebased and no second cue played.
        assert_eq!(engine.session().deadline, Some(t0() + secs(180)));
        assert_eq!(cues.played(), vec![Cue::Start]);
    }

    #[test]
    fn test_pause_when_inactive_is_noop() {
        let (mut engine, cues) = new_engine();
        let before = engine.session().clone();

        engine.pause();

        assert_eq!(engine.session(), &before);
        assert!(cues.played().is_empty());
    }

    #[test]
    fn test_pause_freezes_remaining() {
        let (mut engine, _cues) = new_engine();

        engine.start(t0());
        engine.tick(t0() + secs(30));
        assert_eq!(engine.session().remaining_seconds, 150);

        engine.pause();
        assert!(engine.session().deadline.is_none());

        // Ticks while paused leave the frozen value untouched.
        engine.tick(t0() + secs(3000));
        assert_eq!(engine.session().remaining_seconds, 150);
    }

    #[test]
    fn test_start_resumes_from_frozen_remaining() {
        let (mut engine, _cues) = new_engine();

        engine.start(t0());
        engine.tick(t0() + secs(30));
        engine.pause();

        let resume_at = t0() + secs(1000);
        engine.start(resume_at);
        engine.tick(resume_at + secs(10));

        assert_eq!(engine.session().remaining_seconds, 140);
    }

    #[test]
    fn test_remaining_monotonic_between_ticks() {
        let (mut engine, _cues) = new_engine();
        engine.start(t0());

        let mut last = engine.session().remaining_seconds;
        for elapsed in [1, 5, 17, 60, 119, 179] {
            engine.tick(t0() + secs(elapsed));
            let remaining = engine.session().remaining_seconds;
            assert!(remaining <= last, "remaining increased at {}s", elapsed);
            last = remaining;
        }
    }

    #[test]
    fn test_remaining_rounds_up() {
        let (mut engine, _cues) = new_engine();
        engine.start(t0());

        // 400ms before the deadline still displays a full second.
        engine.tick(t0() + secs(179) + Duration::milliseconds(600));
        assert_eq!(engine.session().remaining_seconds, 1);
    }

    #[test]
    fn test_interval_completion_enters_transition() {
        let (mut engine, cues) = new_engine();

        engine.start(t0());
        engine.tick(t0() + secs(180));

        let session = engine.session();
        assert_eq!(session.mode, Mode::Transitioning);
        assert_eq!(session.phase, Phase::Slow);
        assert_eq!(session.remaining_seconds, 5);
        assert_eq!(session.deadline, Some(t0() + secs(185)));
        assert_eq!(cues.played(), vec![Cue::Start, Cue::End]);
    }

    #[test]
    fn test_completion_fires_once_per_crossing() {
        let (mut engine, cues) = new_engine();

        engine.start(t0());
        engine.tick(t0() + secs(180));
        engine.tick(t0() + secs(180));

        assert_eq!(engine.session().mode, Mode::Transitioning);
        assert_eq!(engine.session().remaining_seconds, 5);
        assert_eq!(cues.played(), vec![Cue::Start, Cue::End]);
    }

    #[test]
    fn test_transition_completion_flips_phase() {
        let (mut engine, cues) = new_engine();

        engine.start(t0());
        engine.tick(t0() + secs(180));
        engine.tick(t0() + secs(185));

        let session = engine.session();
        assert_eq!(session.mode, Mode::Running);
        assert_eq!(session.phase, Phase::Fast);
        assert_eq!(session.remaining_seconds, 180);
        assert!(session.is_active);
        assert_eq!(cues.played(), vec![Cue::Start, Cue::End, Cue::Start]);
    }

    #[test]
    fn test_full_cycle_returns_to_slow() {
        let (mut engine, _cues) = new_engine();

        engine.start(t0());
        engine.tick(t0() + secs(180));
        engine.tick(t0() + secs(185));
        engine.tick(t0() + secs(365));
        engine.tick(t0() + secs(370));

        let session = engine.session();
        assert_eq!(session.phase, Phase::Slow);
        assert_eq!(session.mode, Mode::Running);
        assert_eq!(session.remaining_seconds, 180);
    }

    #[test]
    fn test_skip_during_transition() {
        let (mut engine, cues) = new_engine();

        engine.start(t0());
        engine.tick(t0() + secs(180));
        assert_eq!(engine.session().mode, Mode::Transitioning);
        let cues_before = cues.played().len();

        let skip_at = t0() + secs(182);
        engine.skip_to_next(skip_at);

        let session = engine.session();
        assert_eq!(session.phase, Phase::Fast);
        assert_eq!(session.mode, Mode::Running);
        assert_eq!(session.remaining_seconds, 180);
        assert_eq!(session.deadline, Some(skip_at + secs(180)));
        assert_eq!(cues.played().len(), cues_before);
    }

    #[test]
    fn test_skip_while_paused_stays_paused() {
        let (mut engine, cues) = new_engine();

        engine.skip_to_next(t0());

        let session = engine.session();
        assert_eq!(session.phase, Phase::Fast);
        assert_eq!(session.mode, Mode::Running);
        assert!(!session.is_active);
        assert!(session.deadline.is_none());
        assert_eq!(session.remaining_seconds, 180);
        assert!(cues.played().is_empty());
    }

    #[test]
    fn test_pause_during_transition_freezes_pause() {
        let (mut engine, _cues) = new_engine();

        engine.start(t0());
        engine.tick(t0() + secs(180));
        engine.tick(t0() + secs(182));
        assert_eq!(engine.session().remaining_seconds, 3);

        engine.pause();
        engine.tick(t0() + secs(500));
        assert_eq!(engine.session().remaining_seconds, 3);
        assert_eq!(engine.session().mode, Mode::Transitioning);

        // Resuming finishes the pause and flips the phase.
        let resume_at = t0() + secs(600);
        engine.start(resume_at);
        engine.tick(resume_at + secs(3));
        assert_eq!(engine.session().mode, Mode::Running);
        assert_eq!(engine.session().phase, Phase::Fast);
    }

    #[test]
    fn test_cue_failure_does_not_stall_countdown() {
        let mut engine = IntervalEngine::new(IntervalConfig::default(), FailingCuePlayer).unwrap();

        engine.start(t0());
        engine.tick(t0() + secs(180));
        assert_eq!(engine.session().mode, Mode::Transitioning);

        engine.tick(t0() + secs(185));
        assert_eq!(engine.session().mode, Mode::Running);
        assert_eq!(engine.session().phase, Phase::Fast);
        assert_eq!(engine.session().remaining_seconds, 180);
    }
}
