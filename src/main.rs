//! gmi2html - Convert text/gemini documents to HTML.
//!
//! This binary wires files, stdin and stdout to the gemtext scanner and
//! HTML renderer.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use gemtext_config::Config;
use gemtext_core::{GemtextError, LineKind, Result};
use gemtext_html::{RenderOptions, Renderer};
use gemtext_scanner::Scanner;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("gmi2html v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let mut output: Box<dyn Write> = match cli.output {
        Some(ref path) => {
            info!("Writing to {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        process(io::stdin().lock(), &mut output, cli, &config)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let file = File::open(path).map_err(|e| {
                error!("Cannot open {}: {}", path.display(), e);
                GemtextError::Io(e)
            })?;
            process(file, &mut output, cli, &config)?;
        }
    }

    output.flush()?;
    Ok(())
}

/// Load configuration and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;

    if let Some(size) = cli.buffer_size {
        config.scanner.buffer_size = size;
    }
    if let Some(size) = cli.max_line_size {
        config.scanner.max_line_size = size;
    }
    if cli.raw {
        config.html.escape = false;
    }

    Ok(config)
}

/// Scan one input and write it to `output`.
fn process<R: Read, W: Write>(input: R, output: &mut W, cli: &Cli, config: &Config) -> Result<()> {
    let scanner = Scanner::new(input).with_buffer(
        config.scanner.buffer_size,
        config.scanner.max_line_size,
    );

    if cli.classify {
        return classify(scanner, output);
    }

    let options = RenderOptions {
        escape: config.html.escape,
    };
    Renderer::with_options(scanner, output, options).render()
}

/// Print one description per line, the way the scanner sees the input.
fn classify<R: Read, W: Write>(mut scanner: Scanner<R>, output: &mut W) -> Result<()> {
    while scanner.advance() {
        let line = scanner.line();
        if line.kind() == LineKind::Link {
            writeln!(
                output,
                "line {}: {}: url {}: {}",
                line.number(),
                line.kind(),
                line.url(),
                line.text()
            )?;
        } else {
            writeln!(
                output,
                "line {}: {}: {}",
                line.number(),
                line.kind(),
                line.text()
            )?;
        }
    }

    match scanner.err() {
        Some(err) => Err(err.clone().into()),
        None => Ok(()),
    }
}
