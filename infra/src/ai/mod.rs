//! Generative model clients for the homework assistant

pub mod gemini;

pub use gemini::GeminiHintClient;
