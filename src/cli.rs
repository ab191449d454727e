use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Render a directory subtree as a box-drawing tree",
    after_help = "Examples:\n  dirtree .\n  dirtree --files ~/projects/app"
)]
pub struct Args {
    /// Root directory to render
    pub path: PathBuf,

    /// Include regular files (annotated with their size)
    #[arg(short = 'f', long = "files")]
    pub files: bool,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}
