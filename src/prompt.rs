//! Instruction template for the prompt-optimization request

/// Answers to the five follow-up questions shown under the initial prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptContext<'a> {
    pub goal_and_output: &'a str,
    pub audience: &'a str,
    pub model_or_tool: &'a str,
    pub tone_style: &'a str,
    pub constraints: &'a str,
}

const PREAMBLE: &str = "You are an expert prompt engineer. Your task is to take a user's raw prompt and additional contextual information, then optimize the prompt for clarity, specificity, and effectiveness when used with a large language model. The optimized prompt should be concise, actionable, and directly usable by another AI, without any introductory or concluding remarks from you, just the optimized prompt itself.";

const PLACEHOLDER: &str = "Not specified";

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Render the full instruction sent to the model.
///
/// Field values are inserted verbatim (no escaping); unanswered follow-up
/// questions become "Not specified". The wording and ordering of the five
/// questions is fixed.
pub fn compose_instruction(user_prompt: &str, context: &PromptContext) -> String {
    format!(
        "{PREAMBLE}\n\
         \n\
         Here is the user's original prompt:\n\
         '{user_prompt}'\n\
         \n\
         Here is additional context provided by the user through 5 key questions:\n\
         1. Goal of the prompt & Expected Output: {}\n\
         2. Intended Audience: {}\n\
         3. Model or Tool to be Used: {}\n\
         4. Tone or Style Preferences: {}\n\
         5. Constraints or Must-Haves: {}\n\
         \n\
         Please provide ONLY the optimized prompt, without any conversational text or explanation.",
        or_placeholder(context.goal_and_output),
        or_placeholder(context.audience),
        or_placeholder(context.model_or_tool),
        or_placeholder(context.tone_style),
        or_placeholder(context.constraints),
    )
}
