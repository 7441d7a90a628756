//! monobmp: decode a monochrome BMP file and print it as text.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use zenmono::{RenderOptions, decode_file, render_ascii_with};

/// Decode a 1-bit monochrome BMP and render it to the terminal
#[derive(Parser)]
#[command(name = "monobmp", version, about, long_about = None)]
struct Cli {
    /// Input BMP file
    input: PathBuf,

    /// Glyph for filled (black) pixels
    #[arg(long, default_value_t = 'X')]
    filled: char,

    /// Glyph for blank (white) pixels
    #[arg(long, default_value_t = ' ')]
    blank: char,

    /// Suppress the dimensions line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    let _ = simple_logger::SimpleLogger::new().with_level(level).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("monobmp: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let bitmap = decode_file(&cli.input)?;

    log::info!(
        "{} is a {}x{}x{} bitmap",
        cli.input.display(),
        bitmap.width,
        bitmap.height,
        bitmap.depth
    );

    let options = RenderOptions {
        filled: cli.filled,
        blank: cli.blank,
    };
    let mut text = String::new();
    render_ascii_with(&bitmap, &options, &mut text)?;
    print!("{text}");

    Ok(())
}
