//! Unit tests for history capacity, mutation, and file tolerance.

use super::*;
use crate::options::{OptionRecord, PromptCategory};

fn entry(n: usize) -> HistoryEntry {
    let mut options = OptionRecord::empty(PromptCategory::Text);
    options.set_field("objective", format!("objective {n}")).unwrap();
    HistoryEntry::new(options, format!("prompt {n}"))
}

#[test]
fn new_entry_snapshots_the_category() {
    let options = OptionRecord::empty(PromptCategory::Audio);
    let entry = HistoryEntry::new(options.clone(), "a prompt".into());
    assert_eq!(entry.category, PromptCategory::Audio);
    assert_eq!(entry.options, options);
    assert!(entry.enhanced_prompt.is_none());
}

#[test]
fn fifty_one_entries_leave_fifty_with_the_oldest_evicted() {
    let mut store = HistoryStore::in_memory();
    for n in 0..=HISTORY_CAPACITY {
        store.add(entry(n));
    }

    assert_eq!(store.len(), HISTORY_CAPACITY);
    let listed = store.list();
    // newest first, and the very first entry is gone
    assert_eq!(listed[0].generated_prompt, format!("prompt {HISTORY_CAPACITY}"));
    assert!(listed.iter().all(|e| e.generated_prompt != "prompt 0"));
    assert_eq!(listed.last().unwrap().generated_prompt, "prompt 1");
}

#[test]
fn remove_and_clear_behave() {
    let mut store = HistoryStore::in_memory();
    let first = entry(1);
    let id = first.id;
    store.add(first);
    store.add(entry(2));

    assert!(store.remove(id));
    assert!(!store.remove(id));
    assert_eq!(store.len(), 1);

    store.clear();
    assert!(store.is_empty());
}

#[test]
fn enhancement_attaches_once_and_signals_unknown_ids() {
    let mut store = HistoryStore::in_memory();
    let saved = entry(1);
    let id = saved.id;
    store.add(saved);

    assert!(store.attach_enhancement(id, "refined".into()));
    assert_eq!(store.list()[0].enhanced_prompt.as_deref(), Some("refined"));

    assert!(!store.attach_enhancement(uuid::Uuid::new_v4(), "nope".into()));
}

#[test]
fn entries_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = HistoryStore::open(dir.path());
        store.add(entry(1));
        store.add(entry(2));
    }

    let store = HistoryStore::open(dir.path());
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].generated_prompt, "prompt 2");
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path());
    assert!(store.is_empty());
}

#[test]
fn corrupt_file_loads_as_empty_and_recovers_on_save() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(HISTORY_FILE), b"{ not json").unwrap();

    let mut store = HistoryStore::open(dir.path());
    assert!(store.is_empty());

    store.add(entry(1));
    let reopened = HistoryStore::open(dir.path());
    assert_eq!(reopened.len(), 1);
}

#[test]
fn oversized_file_is_trimmed_on_load() {
    let dir = tempfile::tempdir().unwrap();

    let many: Vec<HistoryEntry> = (0..HISTORY_CAPACITY + 10).map(entry).collect();
    std::fs::write(
        dir.path().join(HISTORY_FILE),
        serde_json::to_vec(&many).unwrap(),
    )
    .unwrap();

    let store = HistoryStore::open(dir.path());
    assert_eq!(store.len(), HISTORY_CAPACITY);
}
