//! Command-line argument parsing and usage text.
//!
//! Options are accepted with `-`, `/`, or `--` prefixes and matched
//! case-insensitively; the first two free arguments are the input and
//! output paths. Malformed numeric values fall back to the previous value
//! rather than aborting.

use std::path::{Path, PathBuf};

use image2gcode_core::{Parameters, DEFAULT_TARGET_WIDTH};

/// Parsed invocation.
#[derive(Debug, Default)]
pub struct Cli {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub line_scan: bool,
    pub help: bool,
    pub params: Parameters,
}

pub fn parse_args<I>(args: I) -> Cli
where
    I: IntoIterator<Item = String>,
{
    let mut cli = Cli::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg.is_empty() {
            continue;
        }
        match arg.to_ascii_lowercase().as_str() {
            "-?" | "/?" | "--help" => cli.help = true,
            "-l" | "/l" | "--linescan" => cli.line_scan = true,
            "-v" | "/v" | "--vertical" => cli.params.vertical = true,
            "-s" | "/s" | "--speed" | "-cr" | "/cr" | "--cutrate" => {
                cli.params.cut_feed_rate = parse_rate(args.next(), cli.params.cut_feed_rate);
            }
            "-mr" | "/mr" | "--moverate" => {
                cli.params.move_feed_rate = parse_rate(args.next(), cli.params.move_feed_rate);
            }
            "-x" | "/x" | "--offsetx" => {
                cli.params.offset_x = parse_value(args.next(), cli.params.offset_x);
            }
            "-y" | "/y" | "--offsety" => {
                cli.params.offset_y = parse_value(args.next(), cli.params.offset_y);
            }
            "-w" | "/w" | "--width" => {
                cli.params.width = parse_value(args.next(), cli.params.width);
            }
            "-h" | "/h" | "--height" => {
                cli.params.height = parse_value(args.next(), cli.params.height);
            }
            _ => {
                if cli.input.is_none() {
                    cli.input = Some(PathBuf::from(&arg));
                } else if cli.output.is_none() {
                    cli.output = Some(PathBuf::from(&arg));
                }
            }
        }
    }

    cli
}

fn parse_value(arg: Option<String>, fallback: f64) -> f64 {
    arg.and_then(|s| s.parse().ok()).unwrap_or(fallback)
}

fn parse_rate(arg: Option<String>, fallback: Option<f64>) -> Option<f64> {
    arg.and_then(|s| s.parse().ok()).or(fallback)
}

/// Default output path: the input path with its extension replaced by `.nc`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("nc")
}

pub fn usage() -> String {
    format!(
        "Image to G-Code converter v{} for laser engraver or similar tools.\n\
         Converts binary (black and white) images into 2D G-Code. White color treated\n\
         as background color, any other color - as engraving/cutting color.\n\
         \n\
         Usage: image2gcode <input file> [<output file>] [options]\n\
         \n\
         Options:\n\
         -l, /l, --lineScan\n\
         \x20 Generate image line-by-line instead of detecting continuous regions.\n\
         -v, /v, --vertical\n\
         \x20 Trace vertical lines instead of horizontal.\n\
         -s, /s, --speed, -cr, /cr, --cutRate <feed rate>\n\
         \x20 Engraving/cutting feed rate. Optional.\n\
         -mr, /mr, --moveRate <feed rate>\n\
         \x20 Moving (not cutting) feed rate. Optional.\n\
         -x, /x, --offsetX <offset>\n\
         \x20 Target X-axis offset, in millimeters. Optional, default is 0.\n\
         -y, /y, --offsetY <offset>\n\
         \x20 Target Y-axis offset, in millimeters. Optional, default is 0.\n\
         -w, /w, --width <width>\n\
         \x20 Target width, in millimeters. If not provided then it will be calculated\n\
         \x20 from provided height and input image width and height. If height is not\n\
         \x20 provided then default width {} will be used.\n\
         -h, /h, --height <height>\n\
         \x20 Target height, in millimeters. If not provided then it will be calculated\n\
         \x20 from target width and input image width and height.\n",
        crate::VERSION,
        DEFAULT_TARGET_WIDTH
    )
}
