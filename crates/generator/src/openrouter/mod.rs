//! OpenRouter-compatible chat completion client

pub mod client;
pub mod types;

pub use client::{OpenRouterClient, DEFAULT_BASE_URL};
pub use types::*;
