use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::CountStrategy;

pub const CONFIG_FILE_NAME: &str = ".loccheckrc.json";

/// Settings read from `.loccheckrc.json`. Every field may be overridden on
/// the command line.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
    #[serde(default, alias = "allowNbTimes", skip_serializing_if = "Option::is_none")]
    pub min_occurrences: Option<usize>,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default, alias = "logEmptyValues")]
    pub report_empty_values: bool,
    #[serde(default, alias = "anxiousMode")]
    pub verbose: bool,
    #[serde(default)]
    pub strategy: CountStrategy,
}

impl Config {
    /// Config written by `loccheck init`.
    pub fn template() -> Self {
        Self {
            source_file: Some(PathBuf::from("en.lproj/Localizable.strings")),
            project_root: Some(PathBuf::from("./")),
            min_occurrences: Some(0),
            extensions: vec!["swift".to_string(), "m".to_string()],
            ..Default::default()
        }
    }

    /// Resolve relative paths against the directory holding the config file.
    fn rebase(mut self, base: &Path) -> Self {
        self.source_file = self.source_file.map(|p| base.join(p));
        self.project_root = self.project_root.map(|p| base.join(p));
        self
    }
}

pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::template()).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            let base = path.parent().unwrap_or(start_dir);
            Ok(ConfigLoadResult {
                config: config.rebase(base),
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
