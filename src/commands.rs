use crate::history::{HistoryEntry, HistoryStore};
use crate::lifecycle::{LifecycleController, RequestState};
use crate::llm::GenerationClient;
use crate::options::{OptionRecord, PromptCategory};
use crate::share::{self, ShareState};
use std::sync::Mutex;
use tauri::command;
use uuid::Uuid;

/// Form state shared with the webview: the active category, the current
/// option record, the persisted history, and the id of the last saved
/// generation (enhancement attaches there).
pub struct AppState {
    pub category: PromptCategory,
    pub options: OptionRecord,
    pub history: HistoryStore,
    pub last_saved: Option<Uuid>,
}

impl AppState {
    pub fn new(history: HistoryStore) -> Self {
        Self {
            category: PromptCategory::Text,
            options: OptionRecord::empty(PromptCategory::Text),
            history,
            last_saved: None,
        }
    }
}

/* ---------- 1.  FORM STATE ---------- */

#[command]
pub fn switch_category(
    category: PromptCategory,
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<OptionRecord, String> {
    let mut guard = state.lock().unwrap();
    // wholesale replacement: fields never leak across categories
    guard.category = category;
    guard.options = OptionRecord::empty(category);
    Ok(guard.options.clone())
}

#[command]
pub fn update_field(
    field: String,
    value: String,
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<(), String> {
    state
        .lock()
        .unwrap()
        .options
        .set_field(&field, value)
        .map_err(|e| e.to_string())
}

#[command]
pub fn apply_dictation(
    field: String,
    transcript: String,
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<OptionRecord, String> {
    let mut guard = state.lock().unwrap();
    guard
        .options
        .apply_transcript(&field, &transcript)
        .map_err(|e| e.to_string())?;
    Ok(guard.options.clone())
}

#[command]
pub fn current_options(
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<OptionRecord, String> {
    Ok(state.lock().unwrap().options.clone())
}

#[command]
pub fn request_state(
    lifecycle: tauri::State<'_, LifecycleController>,
) -> Result<RequestState, String> {
    Ok(lifecycle.state())
}

/* ---------- 2.  GENERATION PIPELINE ---------- */

#[command]
pub async fn generate_prompt(
    model: Option<String>,
    state: tauri::State<'_, Mutex<AppState>>,
    lifecycle: tauri::State<'_, LifecycleController>,
) -> Result<RequestState, String> {
    let ticket = lifecycle.begin().map_err(|e| e.to_string())?;
    let options = state.lock().unwrap().options.clone();

    let client = match GenerationClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            lifecycle.complete_error(ticket, err.to_string());
            return Ok(lifecycle.state());
        }
    };

    match client
        .construct_prompt(&options, model.as_deref().unwrap_or(""))
        .await
    {
        Ok(prompt) => {
            if lifecycle.complete_success(ticket, prompt.clone()) {
                let mut guard = state.lock().unwrap();
                let entry = HistoryEntry::new(options, prompt);
                guard.last_saved = Some(entry.id);
                guard.history.add(entry);
            }
        }
        Err(err) => {
            lifecycle.complete_error(ticket, err.to_string());
        }
    }

    Ok(lifecycle.state())
}

#[command]
pub async fn enhance_prompt(
    model: Option<String>,
    state: tauri::State<'_, Mutex<AppState>>,
    lifecycle: tauri::State<'_, LifecycleController>,
) -> Result<RequestState, String> {
    let existing = match lifecycle.state() {
        RequestState::Success { prompt } => prompt,
        _ => return Err("Nothing to enhance yet. Generate a prompt first.".to_string()),
    };
    let ticket = lifecycle.begin().map_err(|e| e.to_string())?;

    let client = match GenerationClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            lifecycle.complete_error(ticket, err.to_string());
            return Ok(lifecycle.state());
        }
    };

    match client
        .enhance_prompt(&existing, model.as_deref().unwrap_or(""))
        .await
    {
        Ok(refined) => {
            if lifecycle.complete_success(ticket, refined.clone()) {
                let mut guard = state.lock().unwrap();
                if let Some(id) = guard.last_saved {
                    guard.history.attach_enhancement(id, refined);
                }
            }
        }
        Err(err) => {
            lifecycle.complete_error(ticket, err.to_string());
        }
    }

    Ok(lifecycle.state())
}

/* ---------- 3.  HISTORY ---------- */

#[command]
pub fn history_list(
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<Vec<HistoryEntry>, String> {
    Ok(state.lock().unwrap().history.list())
}

#[command]
pub fn history_remove(
    id: Uuid,
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<bool, String> {
    Ok(state.lock().unwrap().history.remove(id))
}

#[command]
pub fn history_clear(state: tauri::State<'_, Mutex<AppState>>) -> Result<(), String> {
    state.lock().unwrap().history.clear();
    Ok(())
}

/* ---------- 4.  SHARING ---------- */

#[command]
pub fn encode_share_state(
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<String, String> {
    let guard = state.lock().unwrap();
    Ok(share::encode(&ShareState::new(guard.options.clone())))
}

#[command]
pub fn build_share_link(
    base_url: String,
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<String, String> {
    let guard = state.lock().unwrap();
    share::share_link(&base_url, &ShareState::new(guard.options.clone()))
        .map_err(|e| e.to_string())
}

#[command]
pub fn restore_share_state(
    token: String,
    state: tauri::State<'_, Mutex<AppState>>,
) -> Result<OptionRecord, String> {
    // decode fully before touching state; a bad token changes nothing
    let decoded = share::decode(&token).map_err(|e| e.to_string())?;

    let mut guard = state.lock().unwrap();
    guard.category = decoded.category;
    guard.options = decoded.options;
    Ok(guard.options.clone())
}
