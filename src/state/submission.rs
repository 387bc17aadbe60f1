//! Submission lifecycle: a single-slot state machine for the one
//! outbound request, plus the transient copy-feedback message.
//!
//! Every transition is a plain method on in-memory state so the whole
//! lifecycle is unit-testable without a terminal or a network.

use crate::gemini::GenerateError;
use std::time::{Duration, Instant};

/// How long a copy-feedback message stays visible
pub const FEEDBACK_TTL: Duration = Duration::from_millis(2000);

/// Phase of the current submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
}

/// Transient feedback message with its creation time. Expiry is
/// latest-write-wins: replacing the value replaces the timestamp, so an
/// older message's deadline can never clear a newer one.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub message: String,
    set_at: Instant,
}

impl Feedback {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            set_at: Instant::now(),
        }
    }

    #[cfg(test)]
    fn with_set_at(message: &str, set_at: Instant) -> Self {
        Self {
            message: message.to_string(),
            set_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.set_at) >= FEEDBACK_TTL
    }
}

/// State of the request lifecycle and its user-visible outcome
#[derive(Debug, Default)]
pub struct SubmissionState {
    phase: Phase,
    pub error: Option<String>,
    pub result: Option<String>,
    pub copy_feedback: Option<Feedback>,
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Enter Pending. Returns false (and changes nothing) when a
    /// submission is already in flight; this is the concurrency guard,
    /// independent of any UI enablement.
    pub fn begin(&mut self) -> bool {
        if self.phase == Phase::Pending {
            return false;
        }
        self.phase = Phase::Pending;
        self.error = None;
        self.result = None;
        self.copy_feedback = None;
        true
    }

    /// Leave Pending with the outcome of the one request. Loading drops
    /// on every path.
    pub fn finish(&mut self, outcome: Result<String, GenerateError>) {
        self.phase = Phase::Idle;
        match outcome {
            Ok(text) => {
                self.result = Some(text);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.result = None;
            }
        }
    }

    /// Record a copy-feedback message, restarting its 2s lifetime
    pub fn set_feedback(&mut self, message: impl Into<String>) {
        self.copy_feedback = Some(Feedback::new(message));
    }

    /// Drop the feedback message once its lifetime has elapsed
    pub fn expire_feedback(&mut self, now: Instant) {
        if self
            .copy_feedback
            .as_ref()
            .is_some_and(|f| f.is_expired(now))
        {
            self.copy_feedback = None;
        }
    }
}
