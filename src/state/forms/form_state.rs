//! The prompt-optimization form: one initial prompt plus five follow-ups

use super::field::FormField;
use crate::prompt::PromptContext;

/// Index of the initial prompt field
pub const PROMPT_FIELD: usize = 0;

/// Total number of fields (initial prompt + five follow-up questions)
pub const FIELD_COUNT: usize = 6;

/// Form state for the optimize screen
#[derive(Debug, Clone)]
pub struct PromptForm {
    pub initial_prompt: FormField,
    pub goal_and_output: FormField,
    pub audience: FormField,
    pub model_or_tool: FormField,
    pub tone_style: FormField,
    pub constraints: FormField,
    pub active_field_index: usize,
}

impl PromptForm {
    pub fn new() -> Self {
        Self {
            initial_prompt: FormField::text(
                "Initial Prompt",
                "e.g. 'Generate a creative story about a futuristic city.'",
                true,
            ),
            goal_and_output: FormField::text(
                "1. Goal & Expected Output",
                "e.g. 'Generate a detailed Python script for data analysis.'",
                true,
            ),
            audience: FormField::text(
                "2. Intended Audience",
                "e.g. 'Software developers with intermediate experience.'",
                false,
            ),
            model_or_tool: FormField::text(
                "3. Model or Tool",
                "e.g. 'Gemini 1.5 Pro for text generation.'",
                false,
            ),
            tone_style: FormField::text(
                "4. Tone or Style",
                "e.g. 'Professional and slightly informal, like a blog post.'",
                false,
            ),
            constraints: FormField::text(
                "5. Constraints or Must-Haves",
                "e.g. 'Maximum 500 words, include a call to action.'",
                true,
            ),
            active_field_index: 0,
        }
    }

    /// Follow-up questions appear once the initial prompt has content
    pub fn show_followups(&self) -> bool {
        !self.initial_prompt.is_blank()
    }

    /// Number of fields currently reachable by focus navigation
    pub fn visible_field_count(&self) -> usize {
        if self.show_followups() {
            FIELD_COUNT
        } else {
            1
        }
    }

    /// Move focus to the next visible field (wraps around)
    pub fn next_field(&mut self) {
        let count = self.visible_field_count();
        self.active_field_index = (self.active_field_index + 1) % count;
    }

    /// Move focus to the previous visible field (wraps around)
    pub fn prev_field(&mut self) {
        let count = self.visible_field_count();
        if self.active_field_index == 0 {
            self.active_field_index = count - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Pull focus back onto a visible field after an edit hid the follow-ups
    pub fn sync_focus(&mut self) {
        if self.active_field_index >= self.visible_field_count() {
            self.active_field_index = PROMPT_FIELD;
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.initial_prompt),
            1 => Some(&self.goal_and_output),
            2 => Some(&self.audience),
            3 => Some(&self.model_or_tool),
            4 => Some(&self.tone_style),
            5 => Some(&self.constraints),
            _ => None,
        }
    }

    pub fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            1 => &mut self.goal_and_output,
            2 => &mut self.audience,
            3 => &mut self.model_or_tool,
            4 => &mut self.tone_style,
            5 => &mut self.constraints,
            _ => &mut self.initial_prompt,
        }
    }

    /// The follow-up answers, as consumed by the request composer
    pub fn context(&self) -> PromptContext<'_> {
        PromptContext {
            goal_and_output: &self.goal_and_output.value,
            audience: &self.audience.value,
            model_or_tool: &self.model_or_tool.value,
            tone_style: &self.tone_style.value,
            constraints: &self.constraints.value,
        }
    }
}

impl Default for PromptForm {
    fn default() -> Self {
        Self::new()
    }
}
