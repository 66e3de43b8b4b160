//! Data models.

pub mod config;
pub mod display;
pub mod stream;
