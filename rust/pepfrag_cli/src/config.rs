use pepfrag::UnimodDb;
use serde::{
    Deserialize,
    Serialize,
};
use std::path::{
    Path,
    PathBuf,
};
use tracing::info;

use crate::errors::CliError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Unimod XML export used instead of the built-in modification table.
    #[serde(default)]
    pub unimod: Option<PathBuf>,
    /// Extra modifications, added to (or replacing entries of) the Unimod
    /// table.
    #[serde(default)]
    pub modifications: Vec<ModificationConfig>,
    /// Number of decimals used when printing fragment m/z values.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModificationConfig {
    pub name: String,
    pub mass: f64,
}

fn default_decimals() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unimod: None,
            modifications: Vec::new(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn mass_db(&self) -> Result<UnimodDb, CliError> {
        let db = match self.unimod {
            Some(ref path) => {
                info!("Loading Unimod modifications from {}", path.display());
                let contents =
                    std::fs::read_to_string(path).map_err(|e| CliError::UnimodRead {
                        path: path.to_string_lossy().to_string(),
                        source: e,
                    })?;
                UnimodDb::from_xml(&contents)?
            }
            None => UnimodDb::default(),
        };
        Ok(db.with_modifications(
            self.modifications
                .iter()
                .map(|x| (x.name.clone(), x.mass)),
        ))
    }
}
