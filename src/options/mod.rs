//! Tagged option records for the five prompt categories.
//!
//! Exactly one category is active at a time. Switching category always
//! replaces the record wholesale through [`OptionRecord::empty`]; fields are
//! never carried over between categories.

use serde::{Deserialize, Serialize};


/// The five prompt categories a record can belong to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    Text,
    Image,
    Video,
    Audio,
    Code,
}

impl PromptCategory {
    pub const ALL: [PromptCategory; 5] = [
        PromptCategory::Text,
        PromptCategory::Image,
        PromptCategory::Video,
        PromptCategory::Audio,
        PromptCategory::Code,
    ];

    /// Stable lowercase form used in share tokens and the history file.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptCategory::Text => "text",
            PromptCategory::Image => "image",
            PromptCategory::Video => "video",
            PromptCategory::Audio => "audio",
            PromptCategory::Code => "code",
        }
    }
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{field}` for {category} options")]
pub struct UnknownField {
    pub category: PromptCategory,
    pub field: String,
}

/// The structured form-field values for one prompt category.
///
/// The discriminant doubles as the active category; every switch point over
/// the variants (factory, field table, formatter, templates) matches
/// exhaustively so a new category cannot be half-wired.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum OptionRecord {
    Text {
        objective: String,
        role: String,
        context: String,
        format: String,
        tone: String,
        tool: String,
    },
    Image {
        mode: String,
        description: String,
        style: String,
        composition: String,
        lighting: String,
        extras: String,
    },
    Video {
        mode: String,
        scene: String,
        action: String,
        visual_style: String,
        camera: String,
        extras: String,
    },
    Audio {
        mode: String,
        sound_type: String,
        genre: String,
        atmosphere: String,
        instruments: String,
        usage: String,
    },
    Code {
        language: String,
        task: String,
        requirements: String,
        example: String,
        level: String,
    },
}

impl OptionRecord {
    /// Factory: a record tagged with `category`, every field empty.
    pub fn empty(category: PromptCategory) -> Self {
        match category {
            PromptCategory::Text => OptionRecord::Text {
                objective: String::new(),
                role: String::new(),
                context: String::new(),
                format: String::new(),
                tone: String::new(),
                tool: String::new(),
            },
            PromptCategory::Image => OptionRecord::Image {
                mode: String::new(),
                description: String::new(),
                style: String::new(),
                composition: String::new(),
                lighting: String::new(),
                extras: String::new(),
            },
            PromptCategory::Video => OptionRecord::Video {
                mode: String::new(),
                scene: String::new(),
                action: String::new(),
                visual_style: String::new(),
                camera: String::new(),
                extras: String::new(),
            },
            PromptCategory::Audio => OptionRecord::Audio {
                mode: String::new(),
                sound_type: String::new(),
                genre: String::new(),
                atmosphere: String::new(),
                instruments: String::new(),
                usage: String::new(),
            },
            PromptCategory::Code => OptionRecord::Code {
                language: String::new(),
                task: String::new(),
                requirements: String::new(),
                example: String::new(),
                level: String::new(),
            },
        }
    }

    /// The record's tag.
    pub fn category(&self) -> PromptCategory {
        match self {
            OptionRecord::Text { .. } => PromptCategory::Text,
            OptionRecord::Image { .. } => PromptCategory::Image,
            OptionRecord::Video { .. } => PromptCategory::Video,
            OptionRecord::Audio { .. } => PromptCategory::Audio,
            OptionRecord::Code { .. } => PromptCategory::Code,
        }
    }

    /// Field names for this category, in the fixed form/formatter order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            OptionRecord::Text { .. } => {
                &["objective", "role", "context", "format", "tone", "tool"]
            }
            OptionRecord::Image { .. } => {
                &["mode", "description", "style", "composition", "lighting", "extras"]
            }
            OptionRecord::Video { .. } => {
                &["mode", "scene", "action", "visual_style", "camera", "extras"]
            }
            OptionRecord::Audio { .. } => {
                &["mode", "sound_type", "genre", "atmosphere", "instruments", "usage"]
            }
            OptionRecord::Code { .. } => {
                &["language", "task", "requirements", "example", "level"]
            }
        }
    }

    /// (name, value) pairs in the fixed order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            OptionRecord::Text { objective, role, context, format, tone, tool } => vec![
                ("objective", objective.as_str()),
                ("role", role.as_str()),
                ("context", context.as_str()),
                ("format", format.as_str()),
                ("tone", tone.as_str()),
                ("tool", tool.as_str()),
            ],
            OptionRecord::Image { mode, description, style, composition, lighting, extras } => {
                vec![
                    ("mode", mode.as_str()),
                    ("description", description.as_str()),
                    ("style", style.as_str()),
                    ("composition", composition.as_str()),
                    ("lighting", lighting.as_str()),
                    ("extras", extras.as_str()),
                ]
            }
            OptionRecord::Video { mode, scene, action, visual_style, camera, extras } => vec![
                ("mode", mode.as_str()),
                ("scene", scene.as_str()),
                ("action", action.as_str()),
                ("visual_style", visual_style.as_str()),
                ("camera", camera.as_str()),
                ("extras", extras.as_str()),
            ],
            OptionRecord::Audio { mode, sound_type, genre, atmosphere, instruments, usage } => {
                vec![
                    ("mode", mode.as_str()),
                    ("sound_type", sound_type.as_str()),
                    ("genre", genre.as_str()),
                    ("atmosphere", atmosphere.as_str()),
                    ("instruments", instruments.as_str()),
                    ("usage", usage.as_str()),
                ]
            }
            OptionRecord::Code { language, task, requirements, example, level } => vec![
                ("language", language.as_str()),
                ("task", task.as_str()),
                ("requirements", requirements.as_str()),
                ("example", example.as_str()),
                ("level", level.as_str()),
            ],
        }
    }

    fn fields_mut(&mut self) -> Vec<(&'static str, &mut String)> {
        match self {
            OptionRecord::Text { objective, role, context, format, tone, tool } => vec![
                ("objective", objective),
                ("role", role),
                ("context", context),
                ("format", format),
                ("tone", tone),
                ("tool", tool),
            ],
            OptionRecord::Image { mode, description, style, composition, lighting, extras } => {
                vec![
                    ("mode", mode),
                    ("description", description),
                    ("style", style),
                    ("composition", composition),
                    ("lighting", lighting),
                    ("extras", extras),
                ]
            }
            OptionRecord::Video { mode, scene, action, visual_style, camera, extras } => vec![
                ("mode", mode),
                ("scene", scene),
                ("action", action),
                ("visual_style", visual_style),
                ("camera", camera),
                ("extras", extras),
            ],
            OptionRecord::Audio { mode, sound_type, genre, atmosphere, instruments, usage } => {
                vec![
                    ("mode", mode),
                    ("sound_type", sound_type),
                    ("genre", genre),
                    ("atmosphere", atmosphere),
                    ("instruments", instruments),
                    ("usage", usage),
                ]
            }
            OptionRecord::Code { language, task, requirements, example, level } => vec![
                ("language", language),
                ("task", task),
                ("requirements", requirements),
                ("example", example),
                ("level", level),
            ],
        }
    }

    /// Read one field by its stable snake_case name.
    pub fn get_field(&self, field: &str) -> Result<&str, UnknownField> {
        self.fields()
            .into_iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
            .ok_or_else(|| UnknownField {
                category: self.category(),
                field: field.to_string(),
            })
    }

    /// Overwrite one field by name. Unknown names leave the record untouched.
    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), UnknownField> {
        let category = self.category();
        match self.fields_mut().into_iter().find(|(name, _)| *name == field) {
            Some((_, slot)) => {
                *slot = value;
                Ok(())
            }
            None => Err(UnknownField {
                category,
                field: field.to_string(),
            }),
        }
    }

    /// Apply a dictation transcript to the field that had focus when capture
    /// started. Appends (space-joined) so dictation never destroys typed text.
    pub fn apply_transcript(&mut self, field: &str, transcript: &str) -> Result<(), UnknownField> {
        let category = self.category();
        match self.fields_mut().into_iter().find(|(name, _)| *name == field) {
            Some((_, slot)) => {
                if slot.is_empty() {
                    *slot = transcript.to_string();
                } else {
                    slot.push(' ');
                    slot.push_str(transcript);
                }
                Ok(())
            }
            None => Err(UnknownField {
                category,
                field: field.to_string(),
            }),
        }
    }

    /// True when every field is the empty string.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }
}
