//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, RenderArgs};
pub use commands::{
    apply_render_overrides, format_output, handle_config_action, init_config, list_ramps,
    load_config, render, CommandError,
};
pub use enums::{Degrees, Filter, Format, Formula, OutputMode, Ramp};
