pub mod stats;
pub mod timer;
pub mod workouts;

use serde::Serialize;
use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::models::{DailyLog, ExerciseType, Mood, Weather, WorkoutRecord};
use crate::store;

#[tauri::command]
pub async fn get_workouts(state: State<'_, Arc<AppState>>) -> Result<Vec<WorkoutRecord>, String> {
  store::list_workouts(&state.db).await
}

#[tauri::command]
pub async fn get_daily_logs(state: State<'_, Arc<AppState>>) -> Result<Vec<DailyLog>, String> {
  store::list_daily_logs(&state.db).await
}

/// ---------------------------------------------------------------------------
/// UI Catalog
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseOption {
  pub name: ExerciseType,
  pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodOption {
  pub name: Mood,
  pub emoji: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherOption {
  pub name: Weather,
  pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
  pub exercise_types: Vec<ExerciseOption>,
  pub moods: Vec<MoodOption>,
  pub weather: Vec<WeatherOption>,
}

/// The pick-lists the logger form and weather widget render, in display
/// order, with their icons
#[tauri::command]
pub fn get_catalog() -> Catalog {
  Catalog {
    exercise_types: ExerciseType::ALL
      .iter()
      .map(|&t| ExerciseOption {
        name: t,
        icon: t.icon(),
      })
      .collect(),
    moods: Mood::ALL
      .iter()
      .map(|&m| MoodOption {
        name: m,
        emoji: m.emoji(),
      })
      .collect(),
    weather: Weather::ALL
      .iter()
      .map(|&w| WeatherOption {
        name: w,
        label: w.label(),
      })
      .collect(),
  }
}
