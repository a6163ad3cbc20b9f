//! hifz-core — quiz synthesis engine, data model, and answer checking.
//!
//! This crate turns chapters fetched from a [`traits::ScriptureSource`] into
//! ordered quiz sets for five memorization modes.

pub mod builder;
pub mod catalog;
pub mod check;
pub mod error;
pub mod model;
pub mod normalize;
pub mod synth;
pub mod traits;

pub use builder::{QuizSetBuilder, QuizSetConfig};
pub use error::{InputError, QuizError, RetrievalError};
pub use model::{QuizMode, QuizRecord};
