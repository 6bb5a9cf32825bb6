use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "confpush")]
#[command(about = "Push .env settings to a remote configuration tool", long_about = None)]
pub struct Cli {
    /// Env file to read (defaults to the configured file, normally .env)
    pub file: Option<PathBuf>,

    /// Print the commands that would run without invoking the tool
    #[arg(long)]
    pub dry_run: bool,

    /// Report skipped lines and applied settings
    #[arg(short, long)]
    pub verbose: bool,
}
