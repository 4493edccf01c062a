mod commands;
mod db;
mod models;
mod stats;
mod store;
mod suggestion;
mod timer;

#[cfg(test)]
mod test_utils;

use db::AppState;
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(|app| {
      // Initialize database and first-run sample data
      let app_handle = app.handle().clone();
      tauri::async_runtime::block_on(async move {
        match db::initialize_db(&app_handle).await {
          Ok(pool) => {
            match store::seed_sample_workouts(&pool).await {
              Ok(0) => {}
              Ok(n) => println!("Seeded {} sample workouts", n),
              Err(e) => eprintln!("Failed to seed sample workouts: {}", e),
            }
            app_handle.manage(Arc::new(AppState::new(pool)));
            println!("Database ready");
          }
          Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
          }
        }
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_workouts,
      commands::get_daily_logs,
      commands::get_catalog,
      // Logging commands
      commands::workouts::log_workout,
      commands::workouts::delete_workout,
      commands::workouts::generate_demo_data,
      commands::workouts::log_daily_entry,
      commands::workouts::delete_daily_log,
      // Dashboard / stats commands
      commands::stats::get_stats_summary,
      commands::stats::get_effort_streak,
      commands::stats::get_motivation,
      commands::stats::get_weekly_activity,
      commands::stats::get_consistency,
      commands::stats::get_mood_correlations,
      commands::stats::get_suggestion,
      // Timer commands
      commands::timer::start_timer,
      commands::timer::pause_timer,
      commands::timer::resume_timer,
      commands::timer::reset_timer,
      commands::timer::cancel_timer,
      commands::timer::get_timer_state,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
