use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};

use image2gcode::cli::{self, Cli};
use image2gcode::{
    encode, generate_toolpath, init_logging, raster_from_image, ProgressReporter, ScanMode,
};

/// Exit code for usage errors, matching BSD sysexits EX_USAGE.
const EXIT_USAGE: u8 = 64;

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("Failed to initialize logging: {err:#}");
        return ExitCode::FAILURE;
    }

    let mut cli = cli::parse_args(std::env::args().skip(1));

    if cli.input.is_none() && !cli.help {
        eprintln!("ERROR: Input file is not specified.\n");
    }
    let input = match (cli.help, cli.input.take()) {
        (false, Some(input)) => input,
        _ => {
            print!("{}", cli::usage());
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match run(cli, input) {
        Ok(()) => {
            info!("Success.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failure. {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut cli: Cli, input: std::path::PathBuf) -> Result<()> {
    let output = cli
        .output
        .take()
        .unwrap_or_else(|| cli::default_output_path(&input));

    info!("Loading input image...");
    let image = image::open(&input)
        .with_context(|| format!("unable to load input image {}", input.display()))?;
    let raster = raster_from_image(&image).context("invalid image data")?;

    cli.params.resolve_target_size(raster.width(), raster.height());

    info!("Input file: {}", input.display());
    info!("Output file: {}", output.display());
    info!("Line scan: {}", if cli.line_scan { "yes" } else { "no" });
    info!(
        "Vertical trace: {}",
        if cli.params.vertical { "yes" } else { "no" }
    );
    info!(
        "Cut feed rate: {}",
        cli.params
            .cut_feed_rate
            .map_or_else(|| "default".to_string(), |r| r.to_string())
    );
    info!(
        "Move feed rate: {}",
        cli.params
            .move_feed_rate
            .map_or_else(|| "default".to_string(), |r| r.to_string())
    );
    info!(
        "Target offset: ({}, {}) mm",
        cli.params.offset_x, cli.params.offset_y
    );
    info!(
        "Target size: {} x {} mm",
        cli.params.width, cli.params.height
    );

    info!("Generating G-Code...");
    let mode = if cli.line_scan {
        ScanMode::Lines
    } else {
        ScanMode::Regions
    };
    let mut progress = ProgressReporter::new(Box::new(|completed, total| {
        let percent = completed as f64 / total as f64 * 100.0;
        eprint!("\rGenerating G-Code... {percent:.1}%   ");
        let _ = std::io::stderr().flush();
    }));
    let toolpath = generate_toolpath(&raster, &cli.params, mode, &mut progress);

    let gcode = encode(&toolpath);
    std::fs::write(&output, gcode)
        .with_context(|| format!("unable to write output file {}", output.display()))?;

    Ok(())
}
