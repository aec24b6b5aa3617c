//! One saved generation, with its option snapshot.

use crate::options::{OptionRecord, PromptCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Created on a successful generation; immutable afterwards except for the
/// optional enhancement attachment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub category: PromptCategory,
    pub options: OptionRecord,
    pub generated_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_prompt: Option<String>,
}

impl HistoryEntry {
    pub fn new(options: OptionRecord, generated_prompt: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            category: options.category(),
            options,
            generated_prompt,
            enhanced_prompt: None,
        }
    }
}
