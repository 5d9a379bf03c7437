//! Host-provided settings.

pub mod config;
