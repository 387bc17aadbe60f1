//! Application state and core logic

use crate::gemini::{GenerateClientTrait, GenerateError};
use crate::prompt::compose_instruction;
use crate::state::{AppState, PROMPT_FIELD};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

type Outcome = std::result::Result<String, GenerateError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the text-generation API
    client: Arc<dyn GenerateClientTrait>,
    /// Delivers request outcomes from the spawned task to the event loop
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn GenerateClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let state = AppState {
            api_configured: client.is_configured(),
            ..Default::default()
        };

        Self {
            state,
            client,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Submit (Ctrl+S, or Cmd+S on macOS)
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::COPY_MODIFIER) =>
            {
                self.submit();
            }
            // Copy result (Ctrl+Y / Cmd+Y)
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_result();
            }
            KeyCode::PageDown => self.state.scroll_down(),
            KeyCode::PageUp => self.state.scroll_up(),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::SUPER) =>
            {
                self.state.form.get_active_field_mut().push_char(c);
            }
            KeyCode::Backspace => {
                self.state.form.get_active_field_mut().pop_char();
                // Erasing the prompt hides the follow-ups; keep focus valid
                if self.state.form.active_field_index == PROMPT_FIELD {
                    self.state.form.sync_focus();
                }
            }
            KeyCode::Enter => {
                if self.state.form.get_active_field_mut().is_multiline {
                    self.state.form.get_active_field_mut().push_newline();
                } else {
                    self.state.form.next_field();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Start the one outbound request for the current form contents.
    /// No-op when the prompt is empty or a request is already in flight.
    pub fn submit(&mut self) {
        if !self.state.can_submit() {
            return;
        }
        // begin() is the actual overlap guard; can_submit() is only the
        // UI-facing enablement check
        if !self.state.submission.begin() {
            return;
        }

        let instruction = compose_instruction(
            &self.state.form.initial_prompt.value,
            &self.state.form.context(),
        );
        tracing::debug!(chars = instruction.len(), "submitting optimize request");

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.generate(instruction).await;
            let _ = tx.send(outcome);
        });
    }

    /// Drain completed request outcomes into state (called by the event loop)
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if let Err(ref e) = outcome {
                tracing::warn!("optimize request failed: {e}");
            }
            self.state.submission.finish(outcome);
            self.state.scroll_offset = 0;
        }
    }

    /// Per-frame housekeeping: expire stale copy feedback
    pub fn tick(&mut self) {
        self.state.submission.expire_feedback(Instant::now());
    }

    /// Copy the current result to the clipboard, recording feedback
    pub fn copy_result(&mut self) {
        let Some(text) = self.state.submission.result.clone() else {
            return;
        };
        match self.copy_to_clipboard(&text) {
            Ok(()) => self.state.submission.set_feedback("Copied!"),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.state.submission.set_feedback("Failed to copy!");
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Await the next outcome instead of polling (test helper)
    #[cfg(test)]
    async fn recv_outcome(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.state.submission.finish(outcome);
        }
    }
}
