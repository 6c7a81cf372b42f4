//! Hint-only homework assistant backed by an external language model

mod service;


pub use service::{AiAssistantService, ChatRole, ChatTurn, HintProvider, MAX_CHAT_TURNS};
