//! Streamer Remote
//!
//! Terminal front end for the Streamer casting service: configuration,
//! command-line parsing, the interactive prompt and one-shot actions.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
