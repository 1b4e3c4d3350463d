use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::errors::DiscoveryError;
use crate::file_utils::FileManager;

// @module: Discovery of eligible script files

/// Substring filters derived from the project ignore file.
///
/// Each non-empty line of the ignore file contributes one rule, with any
/// `*` wildcard characters stripped. Matching is plain substring
/// containment, not glob or path-segment matching: a rule `tmp` excludes
/// `tmp_script.py` and also `attempt.py`. This mirrors the documented
/// behavior of the original generator and is kept as-is.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    rules: Vec<String>,
}

impl IgnoreRuleSet {
    /// Parse rules from the raw text of an ignore file
    pub fn parse(content: &str) -> Self {
        let rules = content
            .lines()
            .map(|line| line.replace('*', ""))
            .filter(|rule| !rule.is_empty())
            .collect();

        IgnoreRuleSet { rules }
    }

    // @checks: Whether a file name contains any ignore substring
    pub fn matches(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| name.contains(rule.as_str()))
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set contains no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Finds the script files that should appear in the generated document
pub struct ScriptDiscovery {
    // @field: Directory listed for candidate scripts
    scripts_dir: PathBuf,
    // @field: Path of the project ignore file
    ignore_file: PathBuf,
    // @field: File names always excluded
    denylist: Vec<String>,
}

impl ScriptDiscovery {
    /// Create a discovery over an explicit directory, ignore file and denylist
    pub fn new(scripts_dir: PathBuf, ignore_file: PathBuf, denylist: Vec<String>) -> Self {
        ScriptDiscovery {
            scripts_dir,
            ignore_file,
            denylist,
        }
    }

    /// Create a discovery from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.scripts_dir.clone(),
            config.ignore_file.clone(),
            config.denylist.clone(),
        )
    }

    /// Produce the set of eligible script names.
    ///
    /// The returned set is unordered; callers that need deterministic
    /// output must sort it themselves.
    pub fn find(&self) -> Result<HashSet<String>, DiscoveryError> {
        if !FileManager::dir_exists(&self.scripts_dir) {
            return Err(DiscoveryError::NotADirectory(self.scripts_dir.clone()));
        }

        if !FileManager::file_exists(&self.ignore_file) {
            return Err(DiscoveryError::IgnoreFileMissing(self.ignore_file.clone()));
        }

        let ignore_content =
            fs::read_to_string(&self.ignore_file).map_err(|source| DiscoveryError::ReadIgnoreFile {
                path: self.ignore_file.clone(),
                source,
            })?;
        let rules = IgnoreRuleSet::parse(&ignore_content);
        debug!("Loaded {} ignore rules from {:?}", rules.len(), self.ignore_file);

        let all_names =
            FileManager::list_file_names(&self.scripts_dir).map_err(|source| DiscoveryError::ListDir {
                path: self.scripts_dir.clone(),
                source,
            })?;

        let eligible: HashSet<String> = all_names
            .into_iter()
            .filter(|name| !self.denylist.iter().any(|denied| denied == name))
            .filter(|name| !rules.matches(name))
            .collect();

        debug!("Discovered {} eligible scripts in {:?}", eligible.len(), self.scripts_dir);
        Ok(eligible)
    }
}
