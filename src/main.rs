// SPDX-License-Identifier: MIT
//
// huekit: harmonic palette generator for the terminal.
//
// This is the command-line front end that wires together the two crates:
//
//   huekit-color   → hex / RGB / HSL conversion, validation, random colors
//   huekit-palette → harmonies, shade ramps, contrast, export, presets
//
// Each invocation flows through:
//
//   args → config defaults → HexColor + Harmony → Palette → export / swatches
//
// Exported text goes to stdout (or --output); logs go to stderr so a pipe
// into a file only ever sees the export.

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use huekit_color::HexColor;
use huekit_palette::{ExportFormat, Harmony};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod config;
mod store;
mod swatch;

use config::AppConfig;
use swatch::Painter;

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
const LOG_ENV: &str = "HUEKIT_LOG";

#[derive(Parser)]
#[command(name = "huekit", version)]
#[command(about = "Harmonic color palettes with shade ramps and CSS/Tailwind/JSON/SCSS export")]
struct Cli {
    /// Never emit ANSI colors, even on a terminal.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a palette and export it
    Generate(GenerateArgs),

    /// Show the 50..950 shade ramp of one color
    Shades {
        color: HexColor,
    },

    /// Show a color as hex, RGB, HSL, luminance and text tone
    Convert {
        color: HexColor,
    },

    /// Draw a palette as swatches with readable text
    Preview(PaletteArgs),

    /// Pick a random base color, optionally exporting its palette
    Random(RandomArgs),

    /// Builtin and saved presets
    Preset {
        #[command(subcommand)]
        cmd: PresetCmd,
    },

    /// List export formats
    Formats,

    /// List harmony rules
    Harmonies,
}

/// Base color and harmony, each falling back to the config.
#[derive(Args, Clone)]
struct PaletteArgs {
    /// Base color as hex (`#8B5CF6`, `8b5cf6`, `#abc`)
    #[arg(long, short = 'c', conflicts_with = "rgb")]
    color: Option<HexColor>,

    /// Base color as `R,G,B`; out-of-range channels are clamped to 0..=255
    #[arg(long, value_name = "R,G,B", allow_hyphen_values = true)]
    rgb: Option<String>,

    /// complementary, analogous, triadic, split-complementary, tetradic
    #[arg(long, short = 'H')]
    harmony: Option<Harmony>,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    palette: PaletteArgs,

    /// css, tailwind, json, scss
    #[arg(long, short = 'f')]
    format: Option<ExportFormat>,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct RandomArgs {
    #[arg(long, short = 'H')]
    harmony: Option<Harmony>,

    /// Export the palette of the random color in this format
    #[arg(long, short = 'f')]
    format: Option<ExportFormat>,

    /// Seed for a reproducible color
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum PresetCmd {
    /// List builtin and saved presets
    List,

    /// Save a preset from a color and harmony
    Save {
        name: String,
        #[command(flatten)]
        palette: PaletteArgs,
    },

    /// Export a builtin or saved preset, by name or id
    Show {
        key: String,
        #[arg(long, short = 'f')]
        format: Option<ExportFormat>,
    },

    /// Delete a saved preset by id
    Delete {
        id: uuid::Uuid,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load();
    let painter = Painter::new(use_color(cli.plain));
    let mut out = io::stdout().lock();

    match cli.cmd {
        Commands::Generate(args) => {
            commands::generate(&config, &args.palette, args.format, args.output.as_deref(), &mut out)
        }
        Commands::Shades { color } => commands::shades(color, painter, &mut out),
        Commands::Convert { color } => commands::convert(color, painter, &mut out),
        Commands::Preview(args) => commands::preview(&config, &args, painter, &mut out),
        Commands::Random(args) => commands::random(&config, &args, painter, &mut out),
        Commands::Preset { cmd } => commands::preset(&config, cmd, &mut out),
        Commands::Formats => commands::formats(&mut out),
        Commands::Harmonies => commands::harmonies(&mut out),
    }
}

/// Install the stderr subscriber. `HUEKIT_LOG` wins over `RUST_LOG`; with
/// neither set only warnings are shown.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn use_color(plain: bool) -> bool {
    !plain && env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn generate_args(args: &[&str]) -> GenerateArgs {
        let argv = ["huekit", "generate"].iter().chain(args);
        match Cli::try_parse_from(argv) {
            Ok(Cli { cmd: Commands::Generate(args), .. }) => args,
            Ok(_) => panic!("parsed into the wrong subcommand"),
            Err(err) => panic!("{err}"),
        }
    }

    #[test]
    fn rgb_accepts_negative_channels_and_clamps() {
        let args = generate_args(&["--rgb", "-5,300,0"]);
        assert_eq!(args.palette.rgb.as_deref(), Some("-5,300,0"));
        let base = args.palette.base_color(&AppConfig::default()).unwrap();
        assert_eq!(base.to_string(), "#00FF00");
    }

    #[test]
    fn rgb_equals_form_still_works() {
        let args = generate_args(&["--rgb=-5,300,0", "-f", "scss"]);
        assert_eq!(args.format, Some(ExportFormat::Scss));
        let base = args.palette.base_color(&AppConfig::default()).unwrap();
        assert_eq!(base.to_string(), "#00FF00");
    }

    #[test]
    fn hex_and_harmony_flags_parse() {
        let args = generate_args(&["-c", "8b5cf6", "-H", "split"]);
        assert_eq!(args.palette.color.map(|c| c.to_string()).as_deref(), Some("#8B5CF6"));
        assert_eq!(args.palette.harmony, Some(Harmony::SplitComplementary));
    }

    #[test]
    fn invalid_hex_is_a_usage_error() {
        let err = Cli::try_parse_from(["huekit", "generate", "-c", "#GG0000"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn color_and_rgb_conflict() {
        let err = Cli::try_parse_from(["huekit", "generate", "-c", "#FF0000", "--rgb", "0,0,0"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
