use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Scan behavior options
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScanOptions {
    /// File extensions to search (lowercase, without the dot)
    pub extensions: Vec<String>,
    /// Skip hidden files and directories
    pub skip_hidden: bool,
    /// Stop after this many matches; `None` means unlimited
    pub max_results: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string()],
            skip_hidden: false,
            max_results: None,
        }
    }
}

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub scan: ScanOptions,
}

impl Config {
    /// Default location of the config file in the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "domfind")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file is absent, unreadable, or not valid TOML. A broken config file
    /// never blocks a scan.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Ignoring malformed config {}: {}", path.display(), e);
                    Config::default()
                }
            },
            Err(e) => {
                eprintln!("Ignoring unreadable config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("Could not determine config directory")?;
        self.save_to(&path)
    }

    /// Save configuration as TOML at `path`, creating parent directories
    /// as needed
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
