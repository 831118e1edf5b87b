use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "podcast-screener")]
#[command(version = "1.0")]
#[command(about = "Editorial quality screening and indexing of podcast episodes", long_about = None)]
pub struct Cli {
    /// JSON configuration file (thresholds, lexicons, contributors)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score the editorial quality of one audio file
    Analyze {
        /// Audio file to analyze
        file: PathBuf,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract keywords, category and cover from a transcript
    Index {
        #[command(flatten)]
        source: TranscriptSource,

        /// Maximum number of keywords
        #[arg(short = 'k', long)]
        max_keywords: Option<usize>,
    },

    /// Run the whole pipeline on one episode and write its publication payload
    Process {
        /// Uploaded audio file
        file: PathBuf,

        /// Contributor e-mail address
        #[arg(short = 'e', long)]
        email: String,

        /// Contributor display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Intro jingle prepended to the episode
        #[arg(long)]
        intro: Option<PathBuf>,

        /// Working directory for staged and final audio
        #[arg(short = 'w', long = "work-dir", default_value = "uploads")]
        work_dir: PathBuf,

        /// Transcript produced by an external engine; defaults to `<final audio>.txt`
        #[arg(short = 't', long)]
        transcript: Option<PathBuf>,
    },

    /// Screen every audio file under the given directories
    Batch {
        /// Directories to scan
        #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
        dirs: Vec<PathBuf>,

        /// Output CSV file path
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct TranscriptSource {
    /// Transcript file
    #[arg(short = 't', long)]
    pub transcript: Option<PathBuf>,

    /// Transcript text given inline
    #[arg(long)]
    pub text: Option<String>,
}
