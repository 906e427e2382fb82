//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod text_generator;

pub use repositories::{PostRepository, ViewStatRepository};
pub use text_generator::{PromptKind, TextGenerator};
