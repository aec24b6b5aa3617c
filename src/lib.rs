// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

pub mod commands;
pub mod history;
pub mod lifecycle;
pub mod llm;
pub mod options;
pub mod prompt;
pub mod share;

use crate::commands::*;
use crate::history::HistoryStore;
use crate::lifecycle::LifecycleController;
use anyhow::Context;
use std::sync::Mutex;
use tauri::Manager;
use tracing::warn;

fn init_state(app: &tauri::App) -> anyhow::Result<()> {
    let data_dir = app
        .path()
        .app_data_dir()
        .context("resolving the app data directory")?;

    app.manage(Mutex::new(AppState::new(HistoryStore::open(&data_dir))));
    app.manage(LifecycleController::new());
    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dotenv::dotenv().ok();
    if let Err(missing) = llm::validate_environment() {
        warn!("{missing}");
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            init_state(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            switch_category,
            update_field,
            apply_dictation,
            current_options,
            request_state,
            generate_prompt,
            enhance_prompt,
            history_list,
            history_remove,
            history_clear,
            encode_share_state,
            build_share_link,
            restore_share_state
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
