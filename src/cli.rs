//! CLI argument parsing for floppyplot

use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "floppyplot")]
#[command(version)]
#[command(
    about = "Plot the Data, Clock and Attention lines of an IEC bus log",
    long_about = None
)]
pub struct Cli {
    /// Bus log to read (default: build/floppy.log)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// PNG file to write (default: line_plots.png)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Image width in pixels (default: 800)
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Image height in pixels (default: 600)
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// TOML configuration file; command-line flags take precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Merge defaults, the optional config file and explicit flags
    pub fn resolve_config(&self) -> Result<PlotConfig> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::from_file(path)?,
            None => PlotConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }

        config.validate().map_err(|message| PlotError::Config {
            path: self
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from("<command line>")),
            message,
        })?;

        Ok(config)
    }
}
