//! Deterministic statistics layer over logged workouts
//!
//! Everything here is a pure function of the record list: streaks,
//! aggregate breakdowns, and chart windows are re-derived on every read
//! and never persisted.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{ExerciseType, Mood, WorkoutRecord};

/// Normalize a stored instant to the user's local calendar day.
/// Two records on the same local day are one day for streak purposes,
/// regardless of time-of-day.
fn local_day(ts: &DateTime<Utc>) -> NaiveDate {
  ts.with_timezone(&Local).date_naive()
}

/// ---------------------------------------------------------------------------
/// Effort Streak
/// ---------------------------------------------------------------------------

/// Count of consecutive local calendar days (ending today or yesterday)
/// with at least one workout.
pub fn effort_streak(records: &[WorkoutRecord]) -> u32 {
  effort_streak_on(records, Local::now().date_naive())
}

/// Streak relative to an explicit `today`, so tests don't depend on the
/// wall clock.
pub fn effort_streak_on(records: &[WorkoutRecord], today: NaiveDate) -> u32 {
  if records.is_empty() {
    return 0;
  }

  let covered: HashSet<NaiveDate> = records.iter().map(|w| local_day(&w.started_at)).collect();

  // A missed day only breaks the streak once both today and yesterday are
  // empty; a workout yesterday keeps it alive, counted from yesterday.
  let mut cursor = if covered.contains(&today) {
    today
  } else if covered.contains(&(today - Duration::days(1))) {
    today - Duration::days(1)
  } else {
    return 0;
  };

  let mut streak = 0;
  while covered.contains(&cursor) {
    streak += 1;
    cursor -= Duration::days(1);
  }

  streak
}

/// ---------------------------------------------------------------------------
/// Motivational Messenger
/// ---------------------------------------------------------------------------

/// Pick the message for the current streak and most recent session.
/// Rule order matters: a short last session is celebrated even when the
/// streak would qualify for the habit messages.
pub fn motivational_message(streak: u32, last_workout: Option<&WorkoutRecord>) -> String {
  if streak == 0 {
    return "Every journey starts with a single step. You got this!".to_string();
  }

  if let Some(last) = last_workout {
    if last.duration_minutes < 15 {
      return format!(
        "Did {} mins? That's {} mins more than zero! Keep it up!",
        last.duration_minutes, last.duration_minutes
      );
    }
  }

  if streak >= 7 {
    return "Wow! One week of showing up! You're unstoppable! 🔥".to_string();
  }
  if streak >= 3 {
    return "3 days in a row! You're building a solid habit! 🚀".to_string();
  }

  "Consistency is key! Great job showing up today! ✨".to_string()
}

/// ---------------------------------------------------------------------------
/// Aggregate Summary
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseShare {
  pub exercise_type: ExerciseType,
  pub count: usize,
  /// Share of all workouts, 0-100
  pub pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodShare {
  pub mood: Mood,
  pub count: usize,
}

/// Headline numbers for the stats tab, recomputed from scratch on every read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSummary {
  pub total_workouts: usize,
  pub total_minutes: i64,
  /// Mean session length in whole minutes (rounded); 0 when empty
  pub avg_duration_minutes: i64,
  /// Workouts in the trailing 7x24h window
  pub this_week: usize,
  /// Per-type counts and percentages, first-logged type first
  pub exercise_breakdown: Vec<ExerciseShare>,
  pub mood_breakdown: Vec<MoodShare>,
  pub favorite_exercise: Option<ExerciseType>,
  pub common_mood: Option<Mood>,
}

impl StatsSummary {
  pub fn compute(records: &[WorkoutRecord]) -> Self {
    let total_workouts = records.len();
    let total_minutes: i64 = records.iter().map(|w| w.duration_minutes).sum();
    let avg_duration_minutes = if total_workouts > 0 {
      (total_minutes as f64 / total_workouts as f64).round() as i64
    } else {
      0
    };

    let week_ago = Utc::now() - Duration::days(7);
    let this_week = records.iter().filter(|w| w.started_at >= week_ago).count();

    // Counts keyed by first-encounter order: ties in the "most frequent"
    // picks below resolve to whichever value appeared first in the list.
    let mut type_counts: Vec<(ExerciseType, usize)> = Vec::new();
    let mut mood_counts: Vec<(Mood, usize)> = Vec::new();
    for w in records {
      match type_counts.iter_mut().find(|(t, _)| *t == w.exercise_type) {
        Some((_, n)) => *n += 1,
        None => type_counts.push((w.exercise_type, 1)),
      }
      match mood_counts.iter_mut().find(|(m, _)| *m == w.mood) {
        Some((_, n)) => *n += 1,
        None => mood_counts.push((w.mood, 1)),
      }
    }

    let exercise_breakdown = type_counts
      .iter()
      .map(|&(exercise_type, count)| ExerciseShare {
        exercise_type,
        count,
        pct: (count as f64 / total_workouts as f64) * 100.0,
      })
      .collect();

    let mood_breakdown = mood_counts
      .iter()
      .map(|&(mood, count)| MoodShare { mood, count })
      .collect();

    let favorite_exercise = max_by_count(&type_counts);
    let common_mood = max_by_count(&mood_counts);

    Self {
      total_workouts,
      total_minutes,
      avg_duration_minutes,
      this_week,
      exercise_breakdown,
      mood_breakdown,
      favorite_exercise,
      common_mood,
    }
  }
}

/// First strictly-greater entry wins, so first-encountered breaks ties
fn max_by_count<T: Copy>(counts: &[(T, usize)]) -> Option<T> {
  let mut best: Option<(T, usize)> = None;
  for &(value, count) in counts {
    match best {
      Some((_, best_count)) if count <= best_count => {}
      _ => best = Some((value, count)),
    }
  }
  best.map(|(value, _)| value)
}

/// ---------------------------------------------------------------------------
/// Rolling Day Windows (weekly chart, consistency grid)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayActivity {
  pub date: NaiveDate,
  pub count: usize,
  pub total_minutes: i64,
  /// 0 none, 1 light (>0 min), 2 medium (>30 min), 3 heavy (>60 min)
  pub intensity: u8,
}

fn intensity_bucket(total_minutes: i64) -> u8 {
  match total_minutes {
    m if m > 60 => 3,
    m if m > 30 => 2,
    m if m > 0 => 1,
    _ => 0,
  }
}

/// Per-day counts and durations for the trailing `days` calendar days
/// ending at `today`, oldest day first. Callers use 7 for the weekly bar
/// chart and 30 for the consistency grid.
pub fn daily_activity(records: &[WorkoutRecord], days: u32, today: NaiveDate) -> Vec<DayActivity> {
  (0..days)
    .rev()
    .map(|offset| {
      let date = today - Duration::days(offset as i64);
      let mut count = 0;
      let mut total_minutes = 0;
      for w in records {
        if local_day(&w.started_at) == date {
          count += 1;
          total_minutes += w.duration_minutes;
        }
      }
      DayActivity {
        date,
        count,
        total_minutes,
        intensity: intensity_bucket(total_minutes),
      }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Mood Correlations
/// ---------------------------------------------------------------------------

/// How often each mood was logged for one exercise type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodCorrelation {
  pub exercise_type: ExerciseType,
  pub total: usize,
  pub moods: Vec<MoodShare>,
}

/// Mood counts per exercise type, most-logged type first, truncated to the
/// five busiest types. Sort is stable, so equally-busy types keep
/// first-encounter order.
pub fn mood_by_exercise(records: &[WorkoutRecord]) -> Vec<MoodCorrelation> {
  let mut correlations: Vec<MoodCorrelation> = Vec::new();

  for w in records {
    let idx = match correlations
      .iter()
      .position(|c| c.exercise_type == w.exercise_type)
    {
      Some(idx) => idx,
      None => {
        correlations.push(MoodCorrelation {
          exercise_type: w.exercise_type,
          total: 0,
          moods: Vec::new(),
        });
        correlations.len() - 1
      }
    };
    let entry = &mut correlations[idx];

    entry.total += 1;
    match entry.moods.iter_mut().find(|s| s.mood == w.mood) {
      Some(share) => share.count += 1,
      None => entry.moods.push(MoodShare {
        mood: w.mood,
        count: 1,
      }),
    }
  }

  correlations.sort_by(|a, b| b.total.cmp(&a.total));
  correlations.truncate(5);
  correlations
}
