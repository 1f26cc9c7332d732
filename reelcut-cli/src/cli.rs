//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use reelcut_align::clip::AspectRatio;
use reelcut_align::window::{
    DEFAULT_MIN_WINDOW, DEFAULT_THRESHOLD, DEFAULT_WINDOW_TOLERANCE, SearchConfig,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "reelcut")]
#[command(about = "Locate highlight quotes in timestamped transcripts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Align highlight candidates against a transcript
    Align {
        /// Path to transcript JSON (word array or document with "words")
        transcript: PathBuf,

        /// Path to candidates JSON (bare array or raw generator output)
        candidates: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Build render-ready clip specs from aligned candidates
    Plan {
        /// Path to aligned candidates JSON
        aligned: PathBuf,

        /// Target aspect ratio (16:9, 9:16, or 1:1)
        #[arg(short, long, default_value_t = AspectRatio::default())]
        aspect: AspectRatio,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Window search tunables exposed on the command line.
#[derive(Args, Clone, Copy, Debug)]
pub struct SearchArgs {
    /// Similarity a window must exceed to be accepted
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Window sizes searched around the candidate's word count
    #[arg(long, default_value_t = DEFAULT_WINDOW_TOLERANCE)]
    pub window_tolerance: usize,

    /// Smallest window considered, in words
    #[arg(long, default_value_t = DEFAULT_MIN_WINDOW)]
    pub min_window: usize,
}

impl From<SearchArgs> for SearchConfig {
    fn from(args: SearchArgs) -> Self {
        Self {
            threshold: args.threshold,
            window_tolerance: args.window_tolerance,
            min_window: args.min_window,
        }
    }
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Align {
            transcript,
            candidates,
            output,
            search,
        } => crate::align::execute(&transcript, &candidates, output.as_deref(), search.into()),
        Commands::Plan {
            aligned,
            aspect,
            output,
        } => crate::plan::execute(&aligned, aspect, output.as_deref()),
    }
}
