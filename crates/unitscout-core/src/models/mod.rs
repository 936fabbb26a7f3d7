//! Data models: settings, input items and output records.

pub mod config;
pub mod input;
pub mod record;
