//! CLI argument definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hitokoto-gist")]
#[command(about = "Write a random hitokoto quote into a GitHub Gist", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with settings; environment variables override it
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the content that would be written instead of updating the gist
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
