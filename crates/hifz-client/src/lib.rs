//! hifz-client — scripture service integration.
//!
//! Implements the `ScriptureSource` trait for alquran.cloud, with an
//! in-memory chapter cache, and loads `hifz.toml` configuration.

pub mod alquran;
pub mod cache;
pub mod config;
pub mod mock;

pub use alquran::AlQuranClient;
pub use cache::ChapterCache;
pub use config::{load_config, load_config_from, HifzConfig};
pub use mock::MockSource;
