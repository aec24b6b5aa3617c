//! Converts an option record into a flat, human-readable instruction block.

use crate::options::OptionRecord;

/// Render every non-empty field as a `Label: value` line, in the fixed
/// per-category order. Pure: the same record always yields the same string,
/// and a fully empty record yields the empty string.
pub fn format_options(record: &OptionRecord) -> String {
    labeled_fields(record)
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// (label, value) pairs in display order. The label table is the single
/// definition of per-category ordering; it is never reordered at runtime.
fn labeled_fields(record: &OptionRecord) -> Vec<(&'static str, &str)> {
    match record {
        OptionRecord::Text { objective, role, context, format, tone, tool } => vec![
            ("Objective", objective.as_str()),
            ("Role", role.as_str()),
            ("Context", context.as_str()),
            ("Output format", format.as_str()),
            ("Tone", tone.as_str()),
            ("Target tool", tool.as_str()),
        ],
        OptionRecord::Image { mode, description, style, composition, lighting, extras } => vec![
            ("Mode", mode.as_str()),
            ("Description", description.as_str()),
            ("Style", style.as_str()),
            ("Composition", composition.as_str()),
            ("Lighting", lighting.as_str()),
            ("Extra details", extras.as_str()),
        ],
        OptionRecord::Video { mode, scene, action, visual_style, camera, extras } => vec![
            ("Mode", mode.as_str()),
            ("Scene", scene.as_str()),
            ("Action", action.as_str()),
            ("Visual style", visual_style.as_str()),
            ("Camera", camera.as_str()),
            ("Extra details", extras.as_str()),
        ],
        OptionRecord::Audio { mode, sound_type, genre, atmosphere, instruments, usage } => vec![
            ("Mode", mode.as_str()),
            ("Sound type", sound_type.as_str()),
            ("Genre", genre.as_str()),
            ("Atmosphere", atmosphere.as_str()),
            ("Instruments", instruments.as_str()),
            ("Intended use", usage.as_str()),
        ],
        OptionRecord::Code { language, task, requirements, example, level } => vec![
            ("Language", language.as_str()),
            ("Task", task.as_str()),
            ("Requirements", requirements.as_str()),
            ("Example", example.as_str()),
            ("Experience level", level.as_str()),
        ],
    }
}
