//! Workout countdown timer
//!
//! A one-second countdown state machine (Idle -> Running <-> Paused ->
//! Completed) plus the async runner glue the command layer spawns. The
//! state machine itself is synchronous and fully testable; only the
//! once-per-second driver lives in a background task.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Motivational quotes shown for the duration of one timer session
const QUOTES: [&str; 12] = [
  "Don't stop when you're tired. Stop when you're done.",
  "Your body can stand almost anything. It's your mind that you have to convince.",
  "The only bad workout is the one that didn't happen.",
  "Motivation is what gets you started. Habit is what keeps you going.",
  "A one-hour workout is 4% of your day. No excuses.",
  "Pain is temporary, but pride is forever.",
  "Results happen over time, not overnight. Work hard, stay consistent.",
  "Strong today, stronger tomorrow.",
  "It never gets easier, you just get stronger.",
  "Push yourself because no one else is going to do it for you.",
  "When you feel like quitting, remember why you started.",
  "Every accomplishment starts with the decision to try.",
];

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq, Serialize)]
pub enum TimerError {
  #[error("A timer session is already active")]
  AlreadyActive,

  #[error("Timer is not running")]
  NotRunning,

  #[error("Timer is not paused")]
  NotPaused,

  #[error("No timer session is active")]
  NotActive,

  #[error("Duration must be at least one minute")]
  InvalidDuration,
}

/// ---------------------------------------------------------------------------
/// Countdown State Machine
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
  Idle,
  Running,
  Paused,
  Completed,
}

/// What a single one-second tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
  /// Not running: paused, idle, or already completed. Time does not advance.
  Ignored,
  /// One second elapsed, time remains
  Ticked,
  /// The countdown just reached zero; reported exactly once
  Completed,
}

/// Serializable view of the timer for the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
  pub status: TimerStatus,
  pub duration_seconds: u32,
  pub remaining_seconds: u32,
  pub quote: String,
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
  status: TimerStatus,
  duration_seconds: u32,
  remaining_seconds: u32,
  quote: &'static str,
}

impl Default for CountdownTimer {
  fn default() -> Self {
    Self {
      status: TimerStatus::Idle,
      duration_seconds: 0,
      remaining_seconds: 0,
      quote: "",
    }
  }
}

impl CountdownTimer {
  pub fn status(&self) -> TimerStatus {
    self.status
  }

  pub fn remaining_seconds(&self) -> u32 {
    self.remaining_seconds
  }

  /// Start a fresh session at the chosen duration.
  /// Valid from Idle or Completed; an active session must be cancelled first.
  pub fn start(&mut self, minutes: u32) -> Result<(), TimerError> {
    match self.status {
      TimerStatus::Running | TimerStatus::Paused => return Err(TimerError::AlreadyActive),
      TimerStatus::Idle | TimerStatus::Completed => {}
    }
    if minutes == 0 {
      return Err(TimerError::InvalidDuration);
    }

    self.duration_seconds = minutes * 60;
    self.remaining_seconds = self.duration_seconds;
    self.status = TimerStatus::Running;
    self.quote = QUOTES
      .choose(&mut rand::thread_rng())
      .copied()
      .unwrap_or(QUOTES[0]);
    Ok(())
  }

  pub fn pause(&mut self) -> Result<(), TimerError> {
    if self.status != TimerStatus::Running {
      return Err(TimerError::NotRunning);
    }
    self.status = TimerStatus::Paused;
    Ok(())
  }

  pub fn resume(&mut self) -> Result<(), TimerError> {
    if self.status != TimerStatus::Paused {
      return Err(TimerError::NotPaused);
    }
    self.status = TimerStatus::Running;
    Ok(())
  }

  /// Rewind to the full duration without ticking. The session stays alive
  /// but stopped, waiting for resume.
  pub fn reset(&mut self) -> Result<(), TimerError> {
    if self.status == TimerStatus::Idle {
      return Err(TimerError::NotActive);
    }
    self.remaining_seconds = self.duration_seconds;
    self.status = TimerStatus::Paused;
    Ok(())
  }

  /// Abandon the session entirely. Safe to call from any state.
  pub fn cancel(&mut self) {
    self.status = TimerStatus::Idle;
    self.duration_seconds = 0;
    self.remaining_seconds = 0;
    self.quote = "";
  }

  /// Advance the countdown by one second.
  /// Called once per second by the runner; time does not advance unless
  /// the timer is running.
  pub fn tick(&mut self) -> TickOutcome {
    if self.status != TimerStatus::Running {
      return TickOutcome::Ignored;
    }

    self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
    if self.remaining_seconds == 0 {
      self.status = TimerStatus::Completed;
      return TickOutcome::Completed;
    }
    TickOutcome::Ticked
  }

  pub fn snapshot(&self) -> TimerSnapshot {
    TimerSnapshot {
      status: self.status,
      duration_seconds: self.duration_seconds,
      remaining_seconds: self.remaining_seconds,
      quote: self.quote.to_string(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Managed Service State
/// ---------------------------------------------------------------------------

/// The timer engine plus the handle of the background tick task, held in
/// `AppState` behind an async mutex. The command layer owns spawning and
/// aborting the task.
#[derive(Default)]
pub struct TimerService {
  pub engine: CountdownTimer,
  pub task: Option<tauri::async_runtime::JoinHandle<()>>,
}

impl TimerService {
  /// Abort the background tick task, if one is alive
  pub fn stop_task(&mut self) {
    if let Some(task) = self.task.take() {
      task.abort();
    }
  }
}
