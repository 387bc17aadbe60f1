//! Gemini client module for the generateContent HTTP API

mod client;
mod traits;

pub use client::{GeminiClient, GenerateError};
pub use traits::GenerateClientTrait;

#[cfg(test)]
pub use traits::MockGenerateClientTrait;
