//! Stream Info Library
//!
//! Probes a media file with ffprobe and turns its streams into a result list
//! for a quick launcher.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};
