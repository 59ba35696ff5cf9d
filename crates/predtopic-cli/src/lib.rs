//! predtopic CLI library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{
    format_page, format_trends, handle_legend, handle_normalize, handle_predict, handle_topic,
    handle_trends, init_logging, load_model, load_settings, read_input, show_config,
};
