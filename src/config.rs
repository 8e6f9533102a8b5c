//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// Largest accepted `duration` parameter, in minutes
pub const MAX_DURATION_MINUTES: i64 = 1440;

/// Offset applied to "now" for the default picker selection
pub const DEFAULT_PICKER_OFFSET_MINUTES: i64 = 15;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Count down to a picked clock time or one given as URL parameters")]
#[command(version = "1.0.0")]
pub struct Config {
    /// URL or query string carrying timer parameters, e.g. "?duration=15" or
    /// "https://example.com/?time=09:30"
    pub location: Option<String>,

    /// Hour to enter into the picker (0-23)
    #[arg(long)]
    pub hour: Option<String>,

    /// Minute to enter into the picker (0-59)
    #[arg(long)]
    pub minute: Option<String>,

    /// Press "start" after entering the picker values
    #[arg(short, long)]
    pub start: bool,

    /// Show the help panel
    #[arg(long)]
    pub help_panel: bool,

    /// Print view snapshots as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Exit once the first countdown has expired and the picker is back
    #[arg(long)]
    pub once: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Timer periods used by the component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Period of the clock ticker
    pub tick: Duration,
    /// Delay between expiry and the return to the picker
    pub reset_delay: Duration,
    /// How long a toast stays visible
    pub toast_visible: Duration,
    /// Fade-out time before a hidden toast is cleared
    pub toast_fade: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            reset_delay: Duration::from_secs(1),
            toast_visible: Duration::from_millis(3000),
            toast_fade: Duration::from_millis(300),
        }
    }
}
