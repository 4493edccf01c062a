//! Context-aware workout suggestions
//!
//! A total function from (hour, mood, weather) to a recommendation label.
//! The rule order is load-bearing: weather overrides mood, mood overrides
//! the time-of-day defaults, and the first match wins. Sunny + Stressed
//! takes the Sunny branch, never the mood branch.

use crate::models::{Mood, Weather};

/// Pick a workout label for the given context. `hour` is 0-23 local time.
pub fn suggest(hour: u32, mood: Option<Mood>, weather: Option<Weather>) -> &'static str {
  // Weather overrides (highest priority)
  if weather == Some(Weather::Rainy) {
    if mood == Some(Mood::Energetic) {
      return "Indoor HIIT Blast";
    }
    return "Cozy Home Yoga";
  }

  if weather == Some(Weather::Indoors) {
    return "Living Room Strength";
  }

  if weather == Some(Weather::Sunny) {
    if hour < 10 {
      return "Morning Sunshine Run";
    }
    if hour > 17 {
      return "Sunset Park Walk";
    }
    return "Outdoor Power Cardio";
  }

  // Mood-based suggestions (Cloudy falls through to here)
  if mood == Some(Mood::Stressed) || mood == Some(Mood::Anxious) {
    return "Calming Yoga Flow";
  }
  if mood == Some(Mood::Tired) {
    return "Light Walking";
  }

  // Time-of-day defaults
  if hour < 10 {
    return "Morning Energizer HIIT";
  }
  if hour < 14 {
    return "Lunch Break Power Walk";
  }
  if hour < 18 {
    return "Afternoon Strength Session";
  }
  "Evening Relaxation Yoga"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rainy_splits_on_energetic() {
    assert_eq!(
      suggest(9, Some(Mood::Energetic), Some(Weather::Rainy)),
      "Indoor HIIT Blast"
    );
    assert_eq!(
      suggest(9, Some(Mood::Happy), Some(Weather::Rainy)),
      "Cozy Home Yoga"
    );
    assert_eq!(suggest(9, None, Some(Weather::Rainy)), "Cozy Home Yoga");
  }

  #[test]
  fn test_indoors_is_fixed() {
    for hour in [0, 9, 13, 23] {
      assert_eq!(
        suggest(hour, Some(Mood::Energetic), Some(Weather::Indoors)),
        "Living Room Strength"
      );
    }
  }

  #[test]
  fn test_sunny_time_bands() {
    assert_eq!(suggest(9, None, Some(Weather::Sunny)), "Morning Sunshine Run");
    assert_eq!(suggest(10, None, Some(Weather::Sunny)), "Outdoor Power Cardio");
    assert_eq!(suggest(17, None, Some(Weather::Sunny)), "Outdoor Power Cardio");
    assert_eq!(suggest(18, None, Some(Weather::Sunny)), "Sunset Park Walk");
  }

  #[test]
  fn test_sunny_beats_mood() {
    // Weather wins even for stressed users
    assert_eq!(
      suggest(12, Some(Mood::Stressed), Some(Weather::Sunny)),
      "Outdoor Power Cardio"
    );
  }

  #[test]
  fn test_mood_beats_time_bands() {
    assert_eq!(suggest(20, Some(Mood::Stressed), None), "Calming Yoga Flow");
    assert_eq!(suggest(8, Some(Mood::Anxious), None), "Calming Yoga Flow");
    assert_eq!(suggest(8, Some(Mood::Tired), None), "Light Walking");
  }

  #[test]
  fn test_cloudy_falls_through_to_mood_and_time() {
    assert_eq!(
      suggest(20, Some(Mood::Tired), Some(Weather::Cloudy)),
      "Light Walking"
    );
    assert_eq!(
      suggest(11, Some(Mood::Happy), Some(Weather::Cloudy)),
      "Lunch Break Power Walk"
    );
  }

  #[test]
  fn test_time_band_defaults() {
    assert_eq!(suggest(9, None, None), "Morning Energizer HIIT");
    assert_eq!(suggest(10, None, None), "Lunch Break Power Walk");
    assert_eq!(suggest(13, None, None), "Lunch Break Power Walk");
    assert_eq!(suggest(14, None, None), "Afternoon Strength Session");
    assert_eq!(suggest(17, None, None), "Afternoon Strength Session");
    assert_eq!(suggest(18, None, None), "Evening Relaxation Yoga");
    assert_eq!(suggest(23, None, None), "Evening Relaxation Yoga");
  }

  #[test]
  fn test_happy_energetic_use_time_defaults() {
    // Neither mood has an override without weather
    assert_eq!(suggest(15, Some(Mood::Happy), None), "Afternoon Strength Session");
    assert_eq!(suggest(15, Some(Mood::Energetic), None), "Afternoon Strength Session");
  }
}
