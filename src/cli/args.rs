use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "versemaster", version, author, about = "A terminal companion for daily scripture mastery practice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play today's daily challenge
    Daily,
    /// Free practice rounds against random passages
    Play {
        /// Difficulty: easy (book), medium (chapter), hard (verse)
        #[arg(long, short)]
        difficulty: Option<String>,
        /// Number of rounds this session
        #[arg(long, short)]
        rounds: Option<u32>,
    },
    /// Show streak and accuracy statistics
    Stats {
        /// Show an ASCII grid for the last 7 days
        #[arg(long)]
        week: bool,
    },
    /// Export a weekly text summary to stdout
    Export,
    /// List the passages in the corpus
    List,
}
