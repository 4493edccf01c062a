use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which daily counter an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyLogKind {
  Hydration,
  Steps,
}

impl std::fmt::Display for DailyLogKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DailyLogKind::Hydration => write!(f, "hydration"),
      DailyLogKind::Steps => write!(f, "steps"),
    }
  }
}

impl std::str::FromStr for DailyLogKind {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "hydration" => Ok(DailyLogKind::Hydration),
      "steps" => Ok(DailyLogKind::Steps),
      _ => Err(format!("Unknown daily log kind: {}", s)),
    }
  }
}

/// A hydration or step-count entry. Same ownership pattern as workouts:
/// created once, deleted by id, never edited. Not consulted by the
/// streak or suggestion logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
  pub id: String,
  pub kind: DailyLogKind,
  /// ml for hydration, step count for steps
  pub value: i64,
  pub logged_at: DateTime<Utc>,
}

/// For inserting new daily logs (without id, logged_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDailyLog {
  pub kind: DailyLogKind,
  pub value: i64,
}
