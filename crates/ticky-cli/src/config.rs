use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Input and output locations for a report run.
///
/// Loaded from a JSON file; every field is optional and falls back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub errors_file: String,
    pub users_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/syslog.log"),
            output_dir: PathBuf::from("output"),
            errors_file: "error_message.csv".to_string(),
            users_file: "user_statistics.csv".to_string(),
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "ticky.json";

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Loads `explicit` if given (it must exist), otherwise `ticky.json` in the
    /// working directory when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(Self::DEFAULT_PATH);
                if default_path.exists() {
                    log::debug!("Using config {}", default_path.display());
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn errors_path(&self) -> PathBuf {
        self.output_dir.join(&self.errors_file)
    }

    pub fn users_path(&self) -> PathBuf {
        self.output_dir.join(&self.users_file)
    }
}
