//! Compare command
//!
//! Usage: trackdiff [--bw] [--width <N>] [--min-length <N>] [--format <FORMAT>] <SOURCE> <TARGET>

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use trackdiff_core::errors::ExError;
use trackdiff_core::evolution::{compare_track_files, EvolutionOptions};
use trackdiff_core::logging_facility::{self, Profile};
use trackdiff_core::report::{render_json_report, render_text_report, RenderOptions};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Track of the earlier run
    pub source: PathBuf,

    /// Track of the later run
    pub target: PathBuf,

    /// Black/white output without ANSI colours
    #[arg(long)]
    pub bw: bool,

    /// Maximum output line width (0 for unlimited)
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Shortest run of elements treated as reused content
    #[arg(long, default_value_t = 1)]
    pub min_length: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Logging configuration
    #[arg(long, value_enum, default_value_t = LogProfile::Development)]
    pub log_profile: LogProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), ExError> {
    logging_facility::init(args.log_profile.into());

    let options = EvolutionOptions {
        min_length: args.min_length,
    };
    let (_, _, evolution) = compare_track_files(&args.source, &args.target, &options)?;

    let report = match args.format {
        OutputFormat::Text => {
            let render = RenderOptions {
                color: !args.bw,
                max_width: args.width,
            };
            render_text_report(&evolution, &render)
        }
        OutputFormat::Json => {
            let mut json = render_json_report(&evolution)?;
            json.push('\n');
            json
        }
    };

    print!("{}", report);
    Ok(())
}
