//! Commands behind the logger form, history view, and daily counters

use serde::Serialize;
use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::models::{DailyLog, NewDailyLog, NewWorkout, WorkoutRecord};
use crate::stats;
use crate::store;

/// What the UI needs after logging: the stored record plus the recomputed
/// streak and message, so the celebration flow can run without a second
/// round-trip
#[derive(Debug, Clone, Serialize)]
pub struct LogWorkoutResult {
  pub workout: WorkoutRecord,
  pub streak: u32,
  pub message: String,
}

#[tauri::command]
pub async fn log_workout(
  state: State<'_, Arc<AppState>>,
  workout: NewWorkout,
) -> Result<LogWorkoutResult, String> {
  // Malformed input stops at this boundary; the stats layer assumes
  // well-formed records
  if workout.duration_minutes <= 0 {
    return Err("Duration must be a positive number of minutes".to_string());
  }

  let created = store::create_workout(&state.db, workout).await?;
  let records = store::list_workouts(&state.db).await?;
  let streak = stats::effort_streak(&records);
  let message = stats::motivational_message(streak, Some(&created));

  Ok(LogWorkoutResult {
    workout: created,
    streak,
    message,
  })
}

#[tauri::command]
pub async fn delete_workout(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
  store::delete_workout(&state.db, &id).await
}

/// Populate the last 30 days with random workouts (dev/demo affordance)
#[tauri::command]
pub async fn generate_demo_data(state: State<'_, Arc<AppState>>) -> Result<usize, String> {
  store::generate_demo_workouts(&state.db, 20).await
}

#[tauri::command]
pub async fn log_daily_entry(
  state: State<'_, Arc<AppState>>,
  entry: NewDailyLog,
) -> Result<DailyLog, String> {
  if entry.value < 0 {
    return Err("Value must be zero or more".to_string());
  }
  store::create_daily_log(&state.db, entry).await
}

#[tauri::command]
pub async fn delete_daily_log(state: State<'_, Arc<AppState>>, id: String) -> Result<(), String> {
  store::delete_daily_log(&state.db, &id).await
}
