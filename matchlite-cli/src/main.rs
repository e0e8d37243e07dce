use clap::Parser;
use matchlite::io::{load_gray_buffer, load_rgb_buffer};
use matchlite::{match_template, min_max_location, PixelBuffer};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Exact SSD template matching")]
struct Cli {
    /// Path to the source image to search in.
    source: PathBuf,
    /// Path to the template image to search for.
    template: PathBuf,
    /// Match in RGB instead of grayscale.
    #[arg(long)]
    rgb: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Serialize)]
struct Report {
    x: usize,
    y: usize,
    ssd: i32,
    map_width: usize,
    map_height: usize,
    worst_ssd: i32,
}

fn load(path: &PathBuf, rgb: bool) -> Result<PixelBuffer<u8>, matchlite::MatchLiteError> {
    if rgb {
        load_rgb_buffer(path)
    } else {
        load_gray_buffer(path)
    }
}

fn run(cli: &Cli) -> Result<Report, matchlite::MatchLiteError> {
    let source = load(&cli.source, cli.rgb)?;
    let template = load(&cli.template, cli.rgb)?;

    let map = match_template(&source, &template)?;
    let ext = min_max_location(&map)?;

    Ok(Report {
        x: ext.min_x,
        y: ext.min_y,
        ssd: ext.min_value,
        map_width: map.width(),
        map_height: map.height(),
        worst_ssd: ext.max_value,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
            .init();
    }

    match run(&cli) {
        Ok(report) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("report serializes")
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
