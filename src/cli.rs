use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli_help;

#[derive(Parser)]
#[command(name = "sqg", version, about = "Grading assistant: grades, feedback and coherence checks")]
pub struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute final grades, bands and coherence warnings
    #[command(long_about = cli_help::GRADE)]
    Grade {
        /// Session file (.toml or .json)
        session: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write feedback for each student (templates or AI)
    #[command(long_about = cli_help::REVIEW)]
    Review {
        /// Session file (.toml or .json)
        session: PathBuf,

        /// Only this student (case-insensitive)
        #[arg(long)]
        student: Option<String>,

        /// Use the language model, falling back to templates on failure
        #[arg(long)]
        ai: bool,

        /// Seed for template phrase choice
        #[arg(long)]
        seed: Option<u64>,

        /// Seconds to wait for the model before falling back (default: 20)
        #[arg(long)]
        timeout: Option<u64>,

        /// Model name, overrides SQG_AI_MODEL
        #[arg(long)]
        model: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Class statistics over graded students
    #[command(long_about = cli_help::STATS)]
    Stats {
        /// Session file (.toml or .json)
        session: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the criteria presets
    Presets {
        /// Grade scale the criteria are capped at
        #[arg(long, default_value = "20")]
        scale: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Language model settings and tools
    Ai {
        #[command(subcommand)]
        command: AiCommands,
    },
}

#[derive(Subcommand)]
pub enum AiCommands {
    /// Show whether AI feedback is configured
    Status,

    /// Fix possessive agreement errors ("ta introduction" -> "ton introduction")
    Polish {
        /// Text to correct (default: read stdin)
        text: Option<String>,
    },
}
