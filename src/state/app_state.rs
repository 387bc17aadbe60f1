//! Application state definitions

use super::{PromptForm, SubmissionState};

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The optimize form
    pub form: PromptForm,
    /// Lifecycle of the outbound request and its outcome
    pub submission: SubmissionState,
    /// Whether an API key was found at startup (status bar indicator)
    pub api_configured: bool,
    /// Scroll offset for the result panel
    pub scroll_offset: usize,
}

impl AppState {
    /// Whether a submission may start right now: the initial prompt has
    /// content and no request is in flight. Empty follow-up answers are
    /// allowed; they compose as "Not specified".
    pub fn can_submit(&self) -> bool {
        self.form.show_followups() && !self.submission.is_loading()
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cannot_submit_with_empty_prompt() {
        let state = AppState::default();
        assert!(!state.can_submit());
    }

    #[test]
    fn test_can_submit_with_prompt_and_empty_followups() {
        let mut state = AppState::default();
        state.form.initial_prompt.push_char('p');
        assert!(state.can_submit());
    }

    #[test]
    fn test_cannot_submit_while_loading() {
        let mut state = AppState::default();
        state.form.initial_prompt.push_char('p');
        state.submission.begin();
        assert!(!state.can_submit());
    }

    #[test]
    fn test_scroll_up_saturates_at_zero() {
        let mut state = AppState::default();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 2);
    }
}
