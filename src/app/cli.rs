use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Normalize line endings, indentation and whitespace across a file tree"
)]
pub struct Cli {
    /// Files or directories to (recursively) scan; defaults to the current directory
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Enable per-file diagnostic messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Indentation type: tabs or spaces [default: tabs]
    #[arg(short, long)]
    pub indent_type: Option<String>,

    /// Indentation width [default: 4]
    #[arg(short = 'w', long)]
    pub indent_width: Option<usize>,

    /// Maximum consecutive blank lines to keep [default: 2]
    #[arg(short, long)]
    pub max_newlines: Option<usize>,

    /// Glob patterns to exclude, matched relative to each scanned root
    #[arg(short, long)]
    pub exclude: Option<Vec<String>>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,
}
