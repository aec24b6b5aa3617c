//! Store logic: add with eviction, remove, clear, file round-trip.

use crate::history::HistoryEntry;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// Oldest entries are evicted past this point.
pub const HISTORY_CAPACITY: usize = 50;

/// Fixed file name inside the app data directory.
pub const HISTORY_FILE: &str = "history.json";

pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>, // newest at the front
    path: Option<PathBuf>,
}

impl HistoryStore {
    /// Open the store backed by `dir/history.json`, loading whatever is
    /// already there. Corrupt or unreadable contents start the store empty.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(HISTORY_FILE);
        let entries = load_entries(&path);
        Self {
            entries,
            path: Some(path),
        }
    }

    /// Store without a backing file. Mutations skip persistence.
    pub fn in_memory() -> Self {
        Self {
            entries: VecDeque::new(),
            path: None,
        }
    }

    /// Prepend an entry, evicting the oldest once over capacity.
    pub fn add(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
        self.save();
    }

    /// Entries, newest first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delete one entry. Returns false when the id is unknown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.save();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.save();
    }

    /// Record the refined prompt on an existing entry. Returns false when
    /// the id is unknown; the entry is otherwise left as created.
    pub fn attach_enhancement(&mut self, id: Uuid, enhanced: String) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.enhanced_prompt = Some(enhanced);
                self.save();
                true
            }
            None => false,
        }
    }

    /// Persist the whole list. A save failure degrades to a warning; the
    /// in-memory list stays authoritative for the session.
    fn save(&self) {
        let Some(path) = &self.path else { return };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!("could not create history directory {}: {err}", parent.display());
                return;
            }
        }

        match serde_json::to_vec_pretty(&self.entries) {
            Ok(bytes) => {
                if let Err(err) = fs::write(path, bytes) {
                    warn!("could not write history file {}: {err}", path.display());
                }
            }
            Err(err) => warn!("could not serialize history: {err}"),
        }
    }
}

fn load_entries(path: &Path) -> VecDeque<HistoryEntry> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return VecDeque::new(),
        Err(err) => {
            warn!("could not read history file {}: {err}", path.display());
            return VecDeque::new();
        }
    };

    match serde_json::from_slice::<VecDeque<HistoryEntry>>(&bytes) {
        Ok(mut entries) => {
            entries.truncate(HISTORY_CAPACITY);
            entries
        }
        Err(err) => {
            warn!("history file {} is corrupt, starting empty: {err}", path.display());
            VecDeque::new()
        }
    }
}
