//! Groq backend (secondary)

mod adapter;
mod types;

pub use adapter::GroqBackend;
