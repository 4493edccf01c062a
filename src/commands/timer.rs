//! Tauri commands for the workout countdown timer
//!
//! The state machine lives in `AppState` behind an async mutex; these
//! commands drive its transitions and manage the once-per-second tick task
//! that pushes `timer://tick` / `timer://completed` events to the window.

use std::sync::Arc;
use std::time::Duration;
use tauri::{AppHandle, Emitter, State};

use crate::db::AppState;
use crate::timer::{TickOutcome, TimerSnapshot, TimerStatus};

/// Start a session at the chosen duration and spawn the tick task
#[tauri::command]
pub async fn start_timer(
  app: AppHandle,
  state: State<'_, Arc<AppState>>,
  minutes: u32,
) -> Result<TimerSnapshot, String> {
  let mut service = state.timer.lock().await;
  service.engine.start(minutes).map_err(|e| e.to_string())?;

  // A fresh session always gets a fresh task; a leftover one from a
  // completed session would have exited already
  service.stop_task();
  service.task = Some(tauri::async_runtime::spawn(run_ticker(
    app.clone(),
    state.inner().clone(),
  )));

  Ok(service.engine.snapshot())
}

#[tauri::command]
pub async fn pause_timer(state: State<'_, Arc<AppState>>) -> Result<TimerSnapshot, String> {
  let mut service = state.timer.lock().await;
  service.engine.pause().map_err(|e| e.to_string())?;
  Ok(service.engine.snapshot())
}

#[tauri::command]
pub async fn resume_timer(state: State<'_, Arc<AppState>>) -> Result<TimerSnapshot, String> {
  let mut service = state.timer.lock().await;
  service.engine.resume().map_err(|e| e.to_string())?;
  Ok(service.engine.snapshot())
}

/// Rewind the session to its full duration, leaving it paused
#[tauri::command]
pub async fn reset_timer(state: State<'_, Arc<AppState>>) -> Result<TimerSnapshot, String> {
  let mut service = state.timer.lock().await;
  service.engine.reset().map_err(|e| e.to_string())?;
  Ok(service.engine.snapshot())
}

/// Abandon the session and stop the tick task
#[tauri::command]
pub async fn cancel_timer(state: State<'_, Arc<AppState>>) -> Result<TimerSnapshot, String> {
  let mut service = state.timer.lock().await;
  service.engine.cancel();
  service.stop_task();
  Ok(service.engine.snapshot())
}

#[tauri::command]
pub async fn get_timer_state(state: State<'_, Arc<AppState>>) -> Result<TimerSnapshot, String> {
  let service = state.timer.lock().await;
  Ok(service.engine.snapshot())
}

/// Once-per-second driver. Ticks advance only while the engine is running;
/// a paused engine ignores them, so pausing needs no task coordination.
/// The task exits after completion or cancellation.
async fn run_ticker(app: AppHandle, state: Arc<AppState>) {
  let mut interval = tokio::time::interval(Duration::from_secs(1));
  // The first interval tick fires immediately; swallow it so the first
  // decrement lands a full second after start
  interval.tick().await;

  loop {
    interval.tick().await;
    let mut service = state.timer.lock().await;

    match service.engine.tick() {
      TickOutcome::Ticked => {
        emit_or_log(&app, "timer://tick", service.engine.snapshot());
      }
      TickOutcome::Completed => {
        emit_or_log(&app, "timer://completed", service.engine.snapshot());
        break;
      }
      TickOutcome::Ignored => {
        // Cancelled out from under us; completed is unreachable here
        // because this task reported it and exited
        if service.engine.status() == TimerStatus::Idle {
          break;
        }
      }
    }
  }
}

fn emit_or_log(app: &AppHandle, event: &str, snapshot: TimerSnapshot) {
  if let Err(e) = app.emit(event, snapshot) {
    eprintln!("Failed to emit {}: {}", event, e);
  }
}
