//! Record Store: persistence for workout and daily-activity logs
//!
//! The store owns all writes. Records are created and deleted here, never
//! edited; the statistics layer only reads the lists these helpers return.
//! First run seeds a handful of sample workouts so the dashboard isn't
//! empty.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use sqlx::{Row, SqlitePool};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::{DailyLog, ExerciseType, Mood, NewDailyLog, NewWorkout, WorkoutRecord};

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Opaque record id: creation instant plus a process-wide sequence number,
/// so burst inserts (seeding, demo data) can't collide
fn next_id() -> String {
  let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
  format!("{}-{}", Utc::now().timestamp_millis(), seq)
}

/// ---------------------------------------------------------------------------
/// Workouts
/// ---------------------------------------------------------------------------

/// All workout records, newest first
pub async fn list_workouts(pool: &SqlitePool) -> Result<Vec<WorkoutRecord>, String> {
  let rows = sqlx::query(
    r#"
    SELECT id, exercise_type, duration_minutes, mood, notes, started_at, created_at
    FROM workouts
    ORDER BY started_at DESC
    "#,
  )
  .fetch_all(pool)
  .await
  .map_err(|e| format!("Failed to fetch workouts: {}", e))?;

  let mut workouts = Vec::with_capacity(rows.len());
  for row in rows {
    let type_str: String = row.get("exercise_type");
    let mood_str: String = row.get("mood");

    workouts.push(WorkoutRecord {
      id: row.get("id"),
      exercise_type: type_str.parse()?,
      duration_minutes: row.get("duration_minutes"),
      mood: mood_str.parse()?,
      notes: row.get("notes"),
      started_at: row.get("started_at"),
      created_at: row.get("created_at"),
    });
  }

  Ok(workouts)
}

/// Create a workout record stamped with the current instant.
/// The store assigns the id and timestamp; callers only supply the
/// loggable fields.
pub async fn create_workout(pool: &SqlitePool, new: NewWorkout) -> Result<WorkoutRecord, String> {
  create_workout_at(pool, new, Utc::now()).await
}

/// Insert shape used by seeding and demo data, which back-date records
async fn create_workout_at(
  pool: &SqlitePool,
  new: NewWorkout,
  started_at: DateTime<Utc>,
) -> Result<WorkoutRecord, String> {
  let record = WorkoutRecord {
    id: next_id(),
    exercise_type: new.exercise_type,
    duration_minutes: new.duration_minutes,
    mood: new.mood,
    notes: new.notes,
    started_at,
    created_at: Some(Utc::now()),
  };

  sqlx::query(
    r#"
    INSERT INTO workouts (id, exercise_type, duration_minutes, mood, notes, started_at, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    "#,
  )
  .bind(&record.id)
  .bind(record.exercise_type.to_string())
  .bind(record.duration_minutes)
  .bind(record.mood.to_string())
  .bind(&record.notes)
  .bind(record.started_at)
  .bind(record.created_at)
  .execute(pool)
  .await
  .map_err(|e| format!("Failed to insert workout: {}", e))?;

  Ok(record)
}

/// Delete by id. Deleting an id that is already gone is a no-op, matching
/// the list-filter semantics the history view expects.
pub async fn delete_workout(pool: &SqlitePool, id: &str) -> Result<(), String> {
  sqlx::query("DELETE FROM workouts WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to delete workout: {}", e))?;
  Ok(())
}

/// ---------------------------------------------------------------------------
/// First-Run Seeding
/// ---------------------------------------------------------------------------

/// Seed the sample workouts when the table is empty. Returns how many
/// records were inserted (zero on every run after the first).
pub async fn seed_sample_workouts(pool: &SqlitePool) -> Result<usize, String> {
  let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
    .fetch_one(pool)
    .await
    .map_err(|e| format!("Failed to count workouts: {}", e))?;

  if count > 0 {
    return Ok(0);
  }

  let now = Utc::now();
  let samples: [(ExerciseType, i64, Mood, Option<&str>, i64); 5] = [
    (ExerciseType::Hiit, 30, Mood::Energetic, None, 0),
    (ExerciseType::Yoga, 45, Mood::Happy, Some("Morning flow session"), 1),
    (ExerciseType::Running, 25, Mood::Energetic, None, 2),
    (ExerciseType::Strength, 50, Mood::Happy, Some("Upper body focus"), 3),
    (ExerciseType::Walking, 40, Mood::Tired, None, 5),
  ];

  for (exercise_type, duration_minutes, mood, notes, days_ago) in samples {
    let new = NewWorkout {
      exercise_type,
      duration_minutes,
      mood,
      notes: notes.map(str::to_string),
    };
    create_workout_at(pool, new, now - Duration::days(days_ago)).await?;
  }

  Ok(samples.len())
}

/// Generate random demo workouts spread over the last 30 days, 15-60
/// minutes each. Custom is left out so the breakdown chart stays readable.
pub async fn generate_demo_workouts(pool: &SqlitePool, count: usize) -> Result<usize, String> {
  let demo_types = &ExerciseType::ALL[..5];
  let now = Utc::now();
  let mut rng = rand::rngs::StdRng::from_entropy();

  for _ in 0..count {
    let days_ago = rng.gen_range(0..30);
    let new = NewWorkout {
      exercise_type: demo_types[rng.gen_range(0..demo_types.len())],
      duration_minutes: rng.gen_range(15..60),
      mood: Mood::ALL[rng.gen_range(0..Mood::ALL.len())],
      notes: Some("Generated demo workout".to_string()),
    };
    create_workout_at(pool, new, now - Duration::days(days_ago)).await?;
  }

  Ok(count)
}

/// ---------------------------------------------------------------------------
/// Daily Logs (hydration / steps)
/// ---------------------------------------------------------------------------

/// All hydration and step entries, newest first
pub async fn list_daily_logs(pool: &SqlitePool) -> Result<Vec<DailyLog>, String> {
  let rows = sqlx::query(
    r#"
    SELECT id, kind, value, logged_at
    FROM daily_logs
    ORDER BY logged_at DESC
    "#,
  )
  .fetch_all(pool)
  .await
  .map_err(|e| format!("Failed to fetch daily logs: {}", e))?;

  let mut logs = Vec::with_capacity(rows.len());
  for row in rows {
    let kind_str: String = row.get("kind");
    logs.push(DailyLog {
      id: row.get("id"),
      kind: kind_str.parse()?,
      value: row.get("value"),
      logged_at: row.get("logged_at"),
    });
  }

  Ok(logs)
}

pub async fn create_daily_log(pool: &SqlitePool, new: NewDailyLog) -> Result<DailyLog, String> {
  let log = DailyLog {
    id: next_id(),
    kind: new.kind,
    value: new.value,
    logged_at: Utc::now(),
  };

  sqlx::query("INSERT INTO daily_logs (id, kind, value, logged_at) VALUES (?1, ?2, ?3, ?4)")
    .bind(&log.id)
    .bind(log.kind.to_string())
    .bind(log.value)
    .bind(log.logged_at)
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to insert daily log: {}", e))?;

  Ok(log)
}

pub async fn delete_daily_log(pool: &SqlitePool, id: &str) -> Result<(), String> {
  sqlx::query("DELETE FROM daily_logs WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| format!("Failed to delete daily log: {}", e))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::DailyLogKind;
  use crate::test_utils::setup_test_db;

  #[tokio::test]
  async fn test_seed_runs_once() {
    let pool = setup_test_db().await;

    // First run seeds the five samples
    let inserted = seed_sample_workouts(&pool).await.expect("seed");
    assert_eq!(inserted, 5);

    let workouts = list_workouts(&pool).await.expect("list");
    assert_eq!(workouts.len(), 5);
    // Newest first: today's HIIT session leads
    assert_eq!(workouts[0].exercise_type, ExerciseType::Hiit);
    assert_eq!(workouts[0].duration_minutes, 30);
    assert_eq!(
      workouts[1].notes.as_deref(),
      Some("Morning flow session")
    );

    // Second run is a no-op
    let inserted = seed_sample_workouts(&pool).await.expect("reseed");
    assert_eq!(inserted, 0);
    assert_eq!(list_workouts(&pool).await.expect("list").len(), 5);
  }

  #[tokio::test]
  async fn test_create_assigns_id_and_round_trips() {
    let pool = setup_test_db().await;

    let created = create_workout(
      &pool,
      NewWorkout {
        exercise_type: ExerciseType::Yoga,
        duration_minutes: 20,
        mood: Mood::Stressed,
        notes: Some("evening wind-down".to_string()),
      },
    )
    .await
    .expect("create");

    assert!(!created.id.is_empty());

    let workouts = list_workouts(&pool).await.expect("list");
    assert_eq!(workouts.len(), 1);
    let stored = &workouts[0];
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.exercise_type, ExerciseType::Yoga);
    assert_eq!(stored.mood, Mood::Stressed);
    assert_eq!(stored.notes.as_deref(), Some("evening wind-down"));
    assert_eq!(stored.started_at.timestamp(), created.started_at.timestamp());
  }

  #[tokio::test]
  async fn test_ids_are_unique_under_burst_inserts() {
    let pool = setup_test_db().await;
    generate_demo_workouts(&pool, 20).await.expect("demo data");

    let workouts = list_workouts(&pool).await.expect("list");
    assert_eq!(workouts.len(), 20);

    let mut ids: Vec<&str> = workouts.iter().map(|w| w.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20, "ids must be unique");

    for w in &workouts {
      assert!((15..60).contains(&w.duration_minutes));
      assert_ne!(w.exercise_type, ExerciseType::Custom);
    }
  }

  #[tokio::test]
  async fn test_delete_workout() {
    let pool = setup_test_db().await;

    let created = create_workout(
      &pool,
      NewWorkout {
        exercise_type: ExerciseType::Running,
        duration_minutes: 25,
        mood: Mood::Energetic,
        notes: None,
      },
    )
    .await
    .expect("create");

    delete_workout(&pool, &created.id).await.expect("delete");
    assert!(list_workouts(&pool).await.expect("list").is_empty());

    // Deleting again is a no-op, not an error
    delete_workout(&pool, &created.id).await.expect("re-delete");
  }

  #[tokio::test]
  async fn test_daily_log_round_trip() {
    let pool = setup_test_db().await;

    let water = create_daily_log(
      &pool,
      NewDailyLog {
        kind: DailyLogKind::Hydration,
        value: 500,
      },
    )
    .await
    .expect("hydration");
    create_daily_log(
      &pool,
      NewDailyLog {
        kind: DailyLogKind::Steps,
        value: 8000,
      },
    )
    .await
    .expect("steps");

    let logs = list_daily_logs(&pool).await.expect("list");
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().any(|l| l.kind == DailyLogKind::Steps && l.value == 8000));

    delete_daily_log(&pool, &water.id).await.expect("delete");
    let logs = list_daily_logs(&pool).await.expect("list");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].kind, DailyLogKind::Steps);
  }
}
