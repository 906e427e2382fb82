//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod openai;
pub mod postgres;

pub use openai::{NoopTextGenerator, OpenAiTextGenerator, TextGeneratorImpl};
pub use postgres::{PostgresPostRepository, PostgresViewStatRepository};
