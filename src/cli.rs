//! Command-line interface for gmi2html.

use clap::Parser;
use std::path::PathBuf;

/// gmi2html - Convert text/gemini documents to HTML.
///
/// Reads gemtext line by line and writes HTML as it goes, so it works on
/// pipes as well as on files.
#[derive(Parser, Debug)]
#[command(
    name = "gmi2html",
    author = "Gemtext Contributors",
    version,
    about = "Convert text/gemini documents to HTML",
    after_help = "Examples:\n  \
                  cat index.gmi | gmi2html\n  \
                  gmi2html -o index.html index.gmi\n  \
                  gmi2html --classify index.gmi"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Print the kind of every line instead of HTML
    #[arg(long = "classify")]
    pub classify: bool,

    /// Write text and URLs without HTML escaping
    #[arg(long = "raw")]
    pub raw: bool,

    /// Longest accepted line in bytes, terminator included
    #[arg(long = "max-line-size", value_name = "BYTES")]
    pub max_line_size: Option<usize>,

    /// Initial scanner buffer size in bytes
    #[arg(long = "buffer-size", value_name = "BYTES")]
    pub buffer_size: Option<usize>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use gemtext_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
