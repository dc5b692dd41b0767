use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCAL_CONFIG: &str = ".triespell.toml";

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub language: String,
    /// Explicit word list, takes precedence over the installed language
    pub dictionary: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub ignore_patterns: Vec<String>,
    pub max_mistakes: i32,
    pub max_suggestions: usize,
    pub case_sensitive: bool,
}

/// Contents of one config file. Only keys present in the file are set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub language: Option<String>,
    pub dictionary: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub ignore_patterns: Option<Vec<String>>,
    pub max_mistakes: Option<i32>,
    pub max_suggestions: Option<usize>,
    pub case_sensitive: Option<bool>,
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_max_mistakes() -> i32 {
    1
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            dictionary: None,
            personal_dictionary: None,
            ignore_patterns: vec![
                r"\b[A-Z0-9_]{2,}\b".to_string(),    // ALL_CAPS
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
                r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(), // Emails
            ],
            max_mistakes: default_max_mistakes(),
            max_suggestions: default_max_suggestions(),
            case_sensitive: false,
        }
    }
}

/// Values given on the command line. `None` leaves the file/default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub dictionary: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub ignore_patterns: Vec<String>,
    pub max_mistakes: Option<i32>,
    pub max_suggestions: Option<usize>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "reading global config");
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG);
        if local_path.exists() {
            debug!(path = %local_path.display(), "reading local config");
            config = config.merge(Self::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    fn from_file(path: &Path) -> Result<FileConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, file: FileConfig) -> Self {
        if let Some(language) = file.language {
            self.language = language;
        }
        if let Some(dictionary) = file.dictionary {
            self.dictionary = Some(dictionary);
        }
        if let Some(personal) = file.personal_dictionary {
            self.personal_dictionary = Some(personal);
        }
        if let Some(patterns) = file.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        if let Some(max_mistakes) = file.max_mistakes {
            self.max_mistakes = max_mistakes;
        }
        if let Some(max_suggestions) = file.max_suggestions {
            self.max_suggestions = max_suggestions;
        }
        if let Some(case_sensitive) = file.case_sensitive {
            self.case_sensitive = case_sensitive;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if let Some(dictionary) = overrides.dictionary {
            self.dictionary = Some(dictionary);
        }
        if let Some(personal) = overrides.personal_dictionary {
            self.personal_dictionary = Some(personal);
        }
        self.ignore_patterns.extend(overrides.ignore_patterns);
        if let Some(max_mistakes) = overrides.max_mistakes {
            self.max_mistakes = max_mistakes;
        }
        if let Some(max_suggestions) = overrides.max_suggestions {
            self.max_suggestions = max_suggestions;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "triespell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_personal_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "triespell").map(|dirs| dirs.config_dir().join("personal.txt"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "triespell").map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Personal dictionary to read: the configured one, otherwise the
    /// default location if a file exists there.
    pub fn personal_dictionary_path(&self) -> Option<PathBuf> {
        self.personal_dictionary
            .clone()
            .or_else(|| Self::default_personal_dict_path().filter(|p| p.exists()))
    }
}
