//! Re-usable instruction skeletons.

use crate::options::PromptCategory;

pub fn base_system() -> &'static str {
    r#"You are an expert prompt engineer. You turn a user's form selections into one polished, ready-to-use prompt for a generative AI tool. Reply with the prompt text only: no preamble, no explanations, no surrounding quotes."#
}

/// Category-aware system instruction: the fixed base plus guidance for the
/// kind of output being prompted for.
pub fn system_instruction(category: PromptCategory) -> String {
    let guidance = match category {
        PromptCategory::Text => {
            "The prompt targets a text model. Make the objective explicit, carry over any role, audience context, output format and tone the user selected, and phrase the whole as a direct instruction."
        }
        PromptCategory::Image => {
            "The prompt targets an image generator. Lead with the subject, then fold in style, composition and lighting as concrete visual language an image model responds to."
        }
        PromptCategory::Video => {
            "The prompt targets a video generator. Describe the scene and the action as one continuous shot, including visual style and camera movement where given."
        }
        PromptCategory::Audio => {
            "The prompt targets an audio or music generator. Specify the kind of sound, genre, mood and instrumentation, and keep the description playable rather than narrative."
        }
        PromptCategory::Code => {
            "The prompt targets a coding assistant. State the task and language precisely, include the requirements as constraints, and match the explanation depth to the stated experience level."
        }
    };

    format!("{}\n\n{}", base_system(), guidance)
}

/// System instruction for the refinement call.
pub fn enhance_system() -> &'static str {
    r#"You are an expert prompt engineer. Improve the prompt you are given: tighten the wording, add useful specificity, remove redundancy. Keep the user's intent and language. Reply with the improved prompt text only."#
}

/// User content for the construct call, wrapping the formatted selections.
pub fn construct_request(formatted_options: &str) -> String {
    format!(
        "Craft a single ready-to-use prompt from the following selections:\n\n{}",
        formatted_options
    )
}

/// User content for the enhance call.
pub fn enhance_request(existing_prompt: &str) -> String {
    format!("Improve this prompt:\n\n{}", existing_prompt)
}
