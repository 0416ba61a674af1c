//! Plot configuration
//!
//! Defaults reproduce the fixed emulator workflow: read `build/floppy.log`,
//! write an 800x600 `line_plots.png`. A TOML file can replace any field:
//!
//! ```toml
//! input = "build/floppy.log"
//! output = "line_plots.png"
//! width = 800
//! height = 600
//! ```

use crate::chart::DEFAULT_SIZE;
use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the emulator's bus log
pub const DEFAULT_INPUT: &str = "build/floppy.log";

/// Default chart destination
pub const DEFAULT_OUTPUT: &str = "line_plots.png";

/// Resolved settings for one plot run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Bus log to read
    pub input: PathBuf,

    /// PNG to write (replaced if present)
    pub output: PathBuf,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
        }
    }
}

impl PlotConfig {
    /// Load configuration from a TOML file; absent keys keep their defaults
    ///
    /// # Example
    ///
    /// ```no_run
    /// use floppyplot::config::PlotConfig;
    ///
    /// # fn main() -> Result<(), floppyplot::PlotError> {
    /// let config = PlotConfig::from_file("floppyplot.toml")?;
    /// println!("plotting {}", config.input.display());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_err = |message: String| PlotError::Config {
            path: path.to_path_buf(),
            message,
        };

        let contents = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        let config: PlotConfig = toml::from_str(&contents).map_err(|e| config_err(e.to_string()))?;
        config.validate().map_err(config_err)?;

        Ok(config)
    }

    /// Reject settings that cannot produce an image
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
