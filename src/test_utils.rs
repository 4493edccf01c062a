//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - In-memory database setup
//! - Workout record fixtures

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use sqlx::SqlitePool;

use crate::models::{ExerciseType, Mood, WorkoutRecord};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// ---------------------------------------------------------------------------
/// Workout Fixtures
/// ---------------------------------------------------------------------------

/// An instant on the local calendar day `days_ago` days back, at the given
/// local hour. Noon is the default so day-bucketing tests stay clear of
/// midnight and DST transitions.
pub fn instant_on_day(days_ago: i64, hour: u32) -> DateTime<Utc> {
  let day = Local::now().date_naive() - Duration::days(days_ago);
  let naive = day.and_hms_opt(hour, 0, 0).expect("valid wall-clock time");
  Local
    .from_local_datetime(&naive)
    .single()
    .expect("unambiguous local time")
    .with_timezone(&Utc)
}

/// A 30-minute Running/Happy record logged `days_ago` days back at noon
pub fn record(days_ago: i64) -> WorkoutRecord {
  record_at_hour(days_ago, 12)
}

pub fn record_at_hour(days_ago: i64, hour: u32) -> WorkoutRecord {
  WorkoutRecord {
    id: format!("test-{}-{}", days_ago, hour),
    exercise_type: ExerciseType::Running,
    duration_minutes: 30,
    mood: Mood::Happy,
    notes: None,
    started_at: instant_on_day(days_ago, hour),
    created_at: None,
  }
}

/// Builder-style tweaks for fixture records
pub trait WorkoutFixture {
  fn with_duration(self, minutes: i64) -> Self;
  fn with_type(self, exercise_type: ExerciseType) -> Self;
  fn with_mood(self, mood: Mood) -> Self;
}

impl WorkoutFixture for WorkoutRecord {
  fn with_duration(mut self, minutes: i64) -> Self {
    self.duration_minutes = minutes;
    self
  }

  fn with_type(mut self, exercise_type: ExerciseType) -> Self {
    self.exercise_type = exercise_type;
    self
  }

  fn with_mood(mut self, mood: Mood) -> Self {
    self.mood = mood;
    self
  }
}
