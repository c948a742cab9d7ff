//! Settings that depend on the results site rather than on the code.

use crate::error::*;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Site markers and output settings.
///
/// Everything has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path marker of a district-level results page.
    pub district_marker: String,
    /// `href` marker of a link to a municipality results page.
    pub municipality_marker: String,
    /// Extension appended to the output file name when it is missing.
    pub extension: String,
    /// Timeout of each HTTP request, in seconds.
    pub timeout_secs: u64
}

impl Default for Config {
    fn default() -> Self {
        Config {
            district_marker: "ps32".into(),
            municipality_marker: "ps311".into(),
            extension: "csv".into(),
            timeout_secs: 10
        }
    }
}

impl Config {
    /// Reads a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        Ok(toml::from_str(&contents)?)
    }

    /// Checks that `raw` is the URL of a district results page.
    pub fn source_url(&self, raw: &str) -> Result<Url> {
        let raw = raw.trim();

        if !raw.contains(&self.district_marker) {
            bail!(ErrorKind::InvalidSourceUrl(raw.into()));
        }

        Url::parse(raw).map_err(|_| ErrorKind::InvalidSourceUrl(raw.into()).into())
    }

    /// Output path for the file name given by the user, with the extension
    /// appended when missing.
    pub fn output_path(&self, raw: &str) -> Result<PathBuf> {
        let raw = raw.trim();

        if raw.is_empty() {
            bail!(ErrorKind::EmptyOutputName);
        }

        let suffix = format!(".{}", self.extension);

        if raw.to_lowercase().ends_with(&suffix.to_lowercase()) {
            Ok(PathBuf::from(raw))
        } else {
            Ok(PathBuf::from(format!("{}{}", raw, suffix)))
        }
    }
}
