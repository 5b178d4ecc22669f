//! Google Gemini backend (primary)

mod adapter;
mod types;

pub use adapter::GeminiBackend;
