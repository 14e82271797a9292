//! Command-line argument definitions for the Fretwork CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the tuning, scale and fret window, the
//! output path, configuration file selection, and logging verbosity.

use clap::Parser;

use fretwork::semantic::Instrument;

/// Command-line arguments for the Fretwork scale diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Open-string pitches, comma separated, string 0 first (e.g. "E,A,D,G,B,E")
    #[arg(short, long, conflicts_with = "instrument")]
    pub tuning: Option<String>,

    /// Preset tuning: guitar, bass, ukulele, drop-d or seven-string
    #[arg(short, long)]
    pub instrument: Option<Instrument>,

    /// Scale pitches, comma separated, root first; an empty list draws a blank board
    #[arg(short, long)]
    pub scale: String,

    /// Title drawn above the fretboard
    #[arg(long)]
    pub title: Option<String>,

    /// First visible fret
    #[arg(long)]
    pub start: Option<u8>,

    /// Last visible fret
    #[arg(long)]
    pub stop: Option<u8>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
