use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory containing the scripts to document (non-recursive)
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,

    /// Path to the project ignore file
    #[serde(default = "default_ignore_file")]
    pub ignore_file: PathBuf,

    /// Path of the generated document
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Base URL prepended to script names when generating links
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// File names that are always excluded from discovery
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,

    /// Introductory sentence placed above the script listing
    #[serde(default = "default_intro")]
    pub intro: String,

    /// Optional decorative title/badge block placed above the intro
    #[serde(default)]
    pub header: Option<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_scripts_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_ignore_file() -> PathBuf {
    PathBuf::from(".gitignore")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_base_url() -> String {
    "https://github.com/adamsqi/python-scripts/blob/master/".to_string()
}

fn default_denylist() -> Vec<String> {
    vec![
        ".git".to_string(),
        ".gitignore".to_string(),
        "README.md".to_string(),
        "LICENSE".to_string(),
        "generate_readme.py".to_string(),
    ]
}

fn default_intro() -> String {
    "This is a collection of short Python scripts I use as utility tools or just for testing of various features.".to_string()
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow!("base_url must not be empty"));
        }

        match self.output_path.file_name() {
            Some(name) if !name.is_empty() => {}
            _ => return Err(anyhow!("output_path must name a file: {:?}", self.output_path)),
        }

        Ok(())
    }

    /// Base URL normalized to end with a slash, so that appending a
    /// script name always yields a well-formed link target
    pub fn link_base_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            scripts_dir: default_scripts_dir(),
            ignore_file: default_ignore_file(),
            output_path: default_output_path(),
            base_url: default_base_url(),
            denylist: default_denylist(),
            intro: default_intro(),
            header: None,
            log_level: LogLevel::default(),
        }
    }
}
