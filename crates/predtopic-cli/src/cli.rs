//! CLI argument parsing for predtopic.
//!
//! CLI flags override all other config sources.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use predtopic_types::{ModelKind, TopicId};

/// PREDTopic
///
/// Browse precomputed research topics and classify new research ideas.
#[derive(Parser, Debug)]
#[command(name = "predtopic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/predtopic/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Resolve relative data and model paths against this directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a research idea
    Predict {
        /// Text to classify (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Model to use (lda, bertopic)
        #[arg(short, long)]
        model: Option<ModelKind>,

        /// Emit a space after every rendered token
        #[arg(long)]
        trailing_space: bool,

        /// Print the topic page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a topic page
    Topic {
        /// Model to browse (lda, bertopic)
        #[arg(short, long)]
        model: Option<ModelKind>,

        /// Topic id (defaults to the model's best topic)
        #[arg(short, long)]
        topic: Option<TopicId>,

        /// Print the topic page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the colored topic legend of a model
    Legend {
        #[arg(short, long)]
        model: Option<ModelKind>,

        /// Emit a space after every label
        #[arg(long)]
        trailing_space: bool,
    },

    /// Year-over-year publication trends
    Trends {
        #[arg(short, long)]
        model: Option<ModelKind>,

        /// Only report this topic
        #[arg(short, long)]
        topic: Option<TopicId>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the normalized lemmas of a text
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Print the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_predict_text() {
        let cli = Cli::parse_from(["predtopic", "predict", "graph neural networks"]);
        match cli.command {
            Commands::Predict {
                text,
                file,
                model,
                trailing_space,
                json,
            } => {
                assert_eq!(text, Some("graph neural networks".to_string()));
                assert!(file.is_none());
                assert!(model.is_none());
                assert!(!trailing_space);
                assert!(!json);
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_cli_predict_with_model() {
        let cli = Cli::parse_from(["predtopic", "predict", "-m", "LDA", "--json", "text"]);
        match cli.command {
            Commands::Predict { model, json, .. } => {
                assert_eq!(model, Some(ModelKind::Lda));
                assert!(json);
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_cli_predict_from_file() {
        let cli = Cli::parse_from(["predtopic", "predict", "--file", "idea.txt"]);
        match cli.command {
            Commands::Predict { text, file, .. } => {
                assert!(text.is_none());
                assert_eq!(file, Some(PathBuf::from("idea.txt")));
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_cli_text_and_file_conflict() {
        let result = Cli::try_parse_from(["predtopic", "predict", "text", "--file", "idea.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_unknown_model() {
        let result = Cli::try_parse_from(["predtopic", "topic", "--model", "nmf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_topic() {
        let cli = Cli::parse_from(["predtopic", "topic", "--model", "bertopic", "-t", "4"]);
        match cli.command {
            Commands::Topic { model, topic, json } => {
                assert_eq!(model, Some(ModelKind::Bertopic));
                assert_eq!(topic, Some(4));
                assert!(!json);
            }
            _ => panic!("Expected Topic command"),
        }
    }

    #[test]
    fn test_cli_legend() {
        let cli = Cli::parse_from(["predtopic", "legend", "--trailing-space"]);
        match cli.command {
            Commands::Legend {
                model,
                trailing_space,
            } => {
                assert!(model.is_none());
                assert!(trailing_space);
            }
            _ => panic!("Expected Legend command"),
        }
    }

    #[test]
    fn test_cli_trends() {
        let cli = Cli::parse_from(["predtopic", "trends", "-m", "lda", "--topic", "2"]);
        match cli.command {
            Commands::Trends { model, topic, .. } => {
                assert_eq!(model, Some(ModelKind::Lda));
                assert_eq!(topic, Some(2));
            }
            _ => panic!("Expected Trends command"),
        }
    }

    #[test]
    fn test_cli_normalize() {
        let cli = Cli::parse_from(["predtopic", "normalize", "The cats are running"]);
        assert!(matches!(cli.command, Commands::Normalize { .. }));
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "predtopic",
            "config",
            "--config",
            "/path/to/config.toml",
            "--log-level",
            "debug",
            "--root",
            "/srv/predtopic",
        ]);
        assert!(matches!(cli.command, Commands::Config));
        assert_eq!(cli.config, Some("/path/to/config.toml".to_string()));
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert_eq!(cli.root, Some(PathBuf::from("/srv/predtopic")));
    }
}
