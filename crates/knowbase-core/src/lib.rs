//! # Knowbase Core
//!
//! Configuration and error types shared by every Knowbase crate.

pub mod config;
pub mod error;

pub use config::KnowbaseConfig;
pub use error::{KnowbaseError, Result};
