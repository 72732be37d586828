use std::path::PathBuf;

use clap::Parser;

use crate::data::source::SourceDescriptor;

pub const DEFAULT_TITLE: &str = "Filter";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Plot a stream of numbers, one per line, read from a file or stdin.
#[derive(Parser, Debug)]
#[command(name = "filter-plot")]
#[command(version)]
#[command(about = "Plot one-number-per-line sample streams", long_about = None)]
pub struct Cli {
    /// Input file; standard input when absent or `-`
    pub input_path: Option<PathBuf>,

    /// Chart title
    #[arg(default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Pixels added to the window's base X position (100)
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,

    /// Windowing backend used to place the window (x11, wayland, windows, macos)
    #[arg(long, env = "FILTER_PLOT_BACKEND")]
    pub backend: Option<String>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// What the chart shows besides the samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayParameters {
    pub title: String,
    /// Horizontal shift of the window, in pixels.
    pub x_offset: i32,
}

impl Default for DisplayParameters {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_offset: 0,
        }
    }
}

/// Startup configuration, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceDescriptor,
    pub display: DisplayParameters,
    /// Explicit windowing backend; detected from the environment when `None`.
    pub backend: Option<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            source: SourceDescriptor::from_arg(cli.input_path),
            display: DisplayParameters {
                title: cli.title,
                x_offset: cli.offset,
            },
            backend: cli.backend,
        }
    }
}
