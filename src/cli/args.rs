//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Degrees, Filter, Format, Formula, OutputMode, Ramp};

/// Turn a photo into glyph-based text-art
#[derive(Parser, Debug)]
#[command(name = "glyphcam")]
#[command(version, about = "Render images as luminance-mapped text-art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an image file as text-art
    Render(RenderArgs),
    /// List built-in glyph ramps
    Ramps,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options for `render`. Unset options fall back to the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Encoded image to render (PNG, JPEG, ...)
    pub input: PathBuf,

    /// Grid width in glyphs
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in glyphs
    #[arg(long)]
    pub height: Option<u32>,

    /// Clockwise rotation applied before scaling
    #[arg(long, short)]
    pub rotation: Option<Degrees>,

    /// Built-in glyph ramp
    #[arg(long, conflicts_with = "glyphs")]
    pub ramp: Option<Ramp>,

    /// Custom glyph ramp, darkest first
    #[arg(long)]
    pub glyphs: Option<String>,

    /// Resize filter
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Luminance formula
    #[arg(long)]
    pub formula: Option<Formula>,

    /// What to print to stdout
    #[arg(long, short, default_value = "text")]
    pub output: OutputMode,

    /// Also write the rendering to the cache directory
    #[arg(long, short)]
    pub export: bool,

    /// Export format
    #[arg(long)]
    pub format: Option<Format>,

    /// Export directory
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
