pub mod workout;
pub mod daily_log;

pub use daily_log::{DailyLog, DailyLogKind, NewDailyLog};
pub use workout::{ExerciseType, Mood, NewWorkout, Weather, WorkoutRecord};
