use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelmatch")]
#[command(author, version, about = "Identify movies, episodes and subtitles by filename")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify bare names (without extension)
    Identify {
        /// Names to identify
        #[arg(required = true)]
        names: Vec<String>,

        /// Parse the names as subtitles
        #[arg(long)]
        subtitle: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan directories for media files
    Scan {
        /// Directories to scan
        #[arg(required = true)]
        dirs: Vec<PathBuf>,

        /// Only list files modified within this many hours
        #[arg(long)]
        modified_within_hours: Option<i64>,

        /// Only list media of this kind
        #[arg(long, value_enum)]
        kind: Option<KindFilter>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Movie,
    Episode,
    Subtitle,
    Video,
}
