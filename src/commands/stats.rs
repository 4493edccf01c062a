//! Read-only commands feeding the dashboard and stats tabs
//!
//! Everything here re-derives from the record list on each call; nothing
//! computed is ever written back.

use chrono::{Local, Timelike};
use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::models::{Mood, Weather};
use crate::stats::{self, DayActivity, MoodCorrelation, StatsSummary};
use crate::store;
use crate::suggestion;

#[tauri::command]
pub async fn get_stats_summary(state: State<'_, Arc<AppState>>) -> Result<StatsSummary, String> {
  let records = store::list_workouts(&state.db).await?;
  Ok(StatsSummary::compute(&records))
}

#[tauri::command]
pub async fn get_effort_streak(state: State<'_, Arc<AppState>>) -> Result<u32, String> {
  let records = store::list_workouts(&state.db).await?;
  Ok(stats::effort_streak(&records))
}

#[tauri::command]
pub async fn get_motivation(state: State<'_, Arc<AppState>>) -> Result<String, String> {
  let records = store::list_workouts(&state.db).await?;
  let streak = stats::effort_streak(&records);
  // The list is newest-first, so the head is the most recent session
  Ok(stats::motivational_message(streak, records.first()))
}

/// Per-day counts for the 7-day bar chart, oldest day first
#[tauri::command]
pub async fn get_weekly_activity(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<DayActivity>, String> {
  let records = store::list_workouts(&state.db).await?;
  Ok(stats::daily_activity(&records, 7, Local::now().date_naive()))
}

/// Per-day intensity for the 30-day consistency grid
#[tauri::command]
pub async fn get_consistency(state: State<'_, Arc<AppState>>) -> Result<Vec<DayActivity>, String> {
  let records = store::list_workouts(&state.db).await?;
  Ok(stats::daily_activity(&records, 30, Local::now().date_naive()))
}

#[tauri::command]
pub async fn get_mood_correlations(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<MoodCorrelation>, String> {
  let records = store::list_workouts(&state.db).await?;
  Ok(stats::mood_by_exercise(&records))
}

/// Suggestion for right now: the hour comes from the local clock, mood and
/// weather from whatever context the UI currently holds
#[tauri::command]
pub fn get_suggestion(mood: Option<Mood>, weather: Option<Weather>) -> String {
  let hour = Local::now().hour();
  suggestion::suggest(hour, mood, weather).to_string()
}
