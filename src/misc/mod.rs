//! Odds and ends shared across the tool.

use clap::ValueEnum;

/// Controls when report output uses ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colorize when stdout is a terminal
    Auto,
    /// Always colorize
    Always,
    /// Never colorize
    Never,
}
