use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Interactive shell over an in-memory filesystem tree
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// YAML profile with prompt, default permissions and color settings
    #[clap(long, short)]
    pub profile: Option<PathBuf>,

    /// Color directory names in listings
    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
