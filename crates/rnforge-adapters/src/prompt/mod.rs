//! Operator-input adapters.

pub mod scripted;
pub mod stdin;

pub use scripted::ScriptedPrompt;
pub use stdin::StdinPrompt;
