//! Interactive question session and interrupt handling

mod repl;
mod shutdown;

pub use repl::{InteractiveSession, SessionEnd};
pub use shutdown::spawn_interrupt_listener;
