use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Exercise Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
  Yoga,
  Running,
  #[serde(rename = "HIIT")]
  Hiit,
  Walking,
  Strength,
  Custom,
}

impl ExerciseType {
  /// All loggable exercise types, in the order the UI presents them
  pub const ALL: [ExerciseType; 6] = [
    ExerciseType::Yoga,
    ExerciseType::Running,
    ExerciseType::Hiit,
    ExerciseType::Walking,
    ExerciseType::Strength,
    ExerciseType::Custom,
  ];

  pub fn icon(&self) -> &'static str {
    match self {
      ExerciseType::Yoga => "🧘",
      ExerciseType::Running => "🏃",
      ExerciseType::Hiit => "🔥",
      ExerciseType::Walking => "🚶",
      ExerciseType::Strength => "💪",
      ExerciseType::Custom => "⭐",
    }
  }
}

impl std::fmt::Display for ExerciseType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ExerciseType::Yoga => write!(f, "Yoga"),
      ExerciseType::Running => write!(f, "Running"),
      ExerciseType::Hiit => write!(f, "HIIT"),
      ExerciseType::Walking => write!(f, "Walking"),
      ExerciseType::Strength => write!(f, "Strength"),
      ExerciseType::Custom => write!(f, "Custom"),
    }
  }
}

impl std::str::FromStr for ExerciseType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Yoga" => Ok(ExerciseType::Yoga),
      "Running" => Ok(ExerciseType::Running),
      "HIIT" => Ok(ExerciseType::Hiit),
      "Walking" => Ok(ExerciseType::Walking),
      "Strength" => Ok(ExerciseType::Strength),
      "Custom" => Ok(ExerciseType::Custom),
      _ => Err(format!("Unknown exercise type: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Moods
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
  Stressed,
  Energetic,
  Tired,
  Happy,
  Anxious,
}

impl Mood {
  pub const ALL: [Mood; 5] = [
    Mood::Stressed,
    Mood::Energetic,
    Mood::Tired,
    Mood::Happy,
    Mood::Anxious,
  ];

  pub fn emoji(&self) -> &'static str {
    match self {
      Mood::Stressed => "😰",
      Mood::Energetic => "⚡",
      Mood::Tired => "😴",
      Mood::Happy => "😊",
      Mood::Anxious => "😟",
    }
  }
}

impl std::fmt::Display for Mood {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Mood::Stressed => write!(f, "Stressed"),
      Mood::Energetic => write!(f, "Energetic"),
      Mood::Tired => write!(f, "Tired"),
      Mood::Happy => write!(f, "Happy"),
      Mood::Anxious => write!(f, "Anxious"),
    }
  }
}

impl std::str::FromStr for Mood {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Stressed" => Ok(Mood::Stressed),
      "Energetic" => Ok(Mood::Energetic),
      "Tired" => Ok(Mood::Tired),
      "Happy" => Ok(Mood::Happy),
      "Anxious" => Ok(Mood::Anxious),
      _ => Err(format!("Unknown mood: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Weather Context (set by the UI weather widget, never persisted)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
  Sunny,
  Rainy,
  Cloudy,
  Indoors,
}

impl Weather {
  /// Cycle order used by the weather widget
  pub const ALL: [Weather; 4] = [
    Weather::Sunny,
    Weather::Rainy,
    Weather::Cloudy,
    Weather::Indoors,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      Weather::Sunny => "Sunny & Warm",
      Weather::Rainy => "Rainy Day",
      Weather::Cloudy => "Cloudy & Cool",
      Weather::Indoors => "Staying Inside",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Workout Records
/// ---------------------------------------------------------------------------

/// A single logged workout. Immutable once created, except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
  /// Opaque unique id, assigned by the store
  pub id: String,
  pub exercise_type: ExerciseType,
  pub duration_minutes: i64,
  pub mood: Mood,
  pub notes: Option<String>,
  pub started_at: DateTime<Utc>,
  pub created_at: Option<DateTime<Utc>>,
}

/// For inserting new workouts (without id, started_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
  pub exercise_type: ExerciseType,
  pub duration_minutes: i64,
  pub mood: Mood,
  pub notes: Option<String>,
}
