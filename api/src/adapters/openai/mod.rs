//! AI provider adapter
//!
//! Implementation of the text generator for OpenAI-compatible chat APIs.

pub mod client;
pub mod prompts;

pub use client::{NoopTextGenerator, OpenAiTextGenerator, TextGeneratorImpl};
