//! Headless host for timeline followback sessions.

pub mod commands;
pub mod config;
pub mod logging;
