//! PREDTopic command line
//!
//! Browse precomputed research topics and classify new research ideas.
//!
//! # Usage
//!
//! ```bash
//! predtopic predict "Graph neural networks for fraud detection" [--model lda]
//! predtopic topic [--model bertopic] [--topic 3] [--json]
//! predtopic legend [--model lda]
//! predtopic trends [--model lda] [--topic 3]
//! predtopic normalize "The cats are running quickly"
//! predtopic config
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/predtopic/config.toml)
//! 3. Environment variables (PREDTOPIC_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use predtopic_cli::{
    handle_legend, handle_normalize, handle_predict, handle_topic, handle_trends, init_logging,
    load_settings, show_config, Cli, Commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(
        cli.config.as_deref(),
        cli.log_level.as_deref(),
        cli.root.as_deref(),
    )?;
    init_logging(&settings.log_level)?;

    match cli.command {
        Commands::Predict {
            text,
            file,
            model,
            trailing_space,
            json,
        } => {
            handle_predict(&settings, text, file, model, trailing_space, json)?;
        }
        Commands::Topic { model, topic, json } => {
            handle_topic(&settings, model, topic, json)?;
        }
        Commands::Legend {
            model,
            trailing_space,
        } => {
            handle_legend(&settings, model, trailing_space)?;
        }
        Commands::Trends { model, topic, json } => {
            handle_trends(&settings, model, topic, json)?;
        }
        Commands::Normalize { text } => {
            handle_normalize(&text)?;
        }
        Commands::Config => {
            show_config(&settings)?;
        }
    }

    Ok(())
}
