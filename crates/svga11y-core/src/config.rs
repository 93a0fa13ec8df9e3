//! Configuration loading and parsing for svga11y.
//!
//! Provides functionality to load and parse `svga11y.toml` configuration
//! files. Rule flags keep the camelCase names of the original config format.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::rules::RuleKey;

pub const CONFIG_FILENAME: &str = "svga11y.toml";

const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["ignore", "rules"];
const KNOWN_RULES_KEYS: &[&str] = &[
    "requireTitle",
    "requireDescription",
    "checkAriaLabels",
    "checkContrast",
    "checkRoleAttributes",
    "checkTextAlternatives",
    "checkFocusableElements",
    "checkAnimatedContent",
    "checkImageText",
    "checkLanguageDeclaration",
    "checkResponsiveScaling",
    "checkUniqueIDs",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Glob patterns excluded from directory scans.
    pub ignore: Vec<String>,
    pub rules: RulesConfig,
}

/// Enable/disable flags for the rule catalog.
///
/// Default-enabled policy: an absent flag or an explicit `true` enables the
/// rule; only an explicit `false` disables it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    #[serde(rename = "requireTitle")]
    pub require_title: Option<bool>,
    #[serde(rename = "requireDescription")]
    pub require_description: Option<bool>,
    #[serde(rename = "checkAriaLabels")]
    pub check_aria_labels: Option<bool>,
    #[serde(rename = "checkContrast")]
    pub check_contrast: Option<bool>,
    #[serde(rename = "checkRoleAttributes")]
    pub check_role_attributes: Option<bool>,
    #[serde(rename = "checkTextAlternatives")]
    pub check_text_alternatives: Option<bool>,
    #[serde(rename = "checkFocusableElements")]
    pub check_focusable_elements: Option<bool>,
    #[serde(rename = "checkAnimatedContent")]
    pub check_animated_content: Option<bool>,
    #[serde(rename = "checkImageText")]
    pub check_image_text: Option<bool>,
    #[serde(rename = "checkLanguageDeclaration")]
    pub check_language_declaration: Option<bool>,
    #[serde(rename = "checkResponsiveScaling")]
    pub check_responsive_scaling: Option<bool>,
    #[serde(rename = "checkUniqueIDs")]
    pub check_unique_ids: Option<bool>,
}

impl RulesConfig {
    pub fn is_enabled(&self, key: RuleKey) -> bool {
        let flag = match key {
            RuleKey::Title => self.require_title,
            RuleKey::Description => self.require_description,
            RuleKey::AriaLabels => self.check_aria_labels,
            RuleKey::Contrast => self.check_contrast,
            RuleKey::RoleAttributes => self.check_role_attributes,
            RuleKey::TextAlternatives => self.check_text_alternatives,
            RuleKey::FocusableElements => self.check_focusable_elements,
            RuleKey::AnimatedContent => self.check_animated_content,
            RuleKey::ImageText => self.check_image_text,
            RuleKey::LanguageDeclaration => self.check_language_declaration,
            RuleKey::ResponsiveScaling => self.check_responsive_scaling,
            RuleKey::UniqueIds => self.check_unique_ids,
        };
        flag != Some(false)
    }
}

/// Walks from `start_dir` toward the filesystem root looking for a config
/// file. Stops at the root instead of recursing forever.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "config file found");
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn load_config_with_warnings(path: &Path) -> Result<ConfigResult, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let warnings = detect_unknown_keys(&content);

    Ok(ConfigResult { config, warnings })
}

fn detect_unknown_keys(content: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(_) => return warnings,
    };

    let known_top: HashSet<&str> = KNOWN_TOP_LEVEL_KEYS.iter().copied().collect();
    for key in table.keys() {
        if !known_top.contains(key.as_str()) {
            warnings.push(format!("Unknown config option: '{}'", key));
        }
    }

    if let Some(toml::Value::Table(rules)) = table.get("rules") {
        let known_rules: HashSet<&str> = KNOWN_RULES_KEYS.iter().copied().collect();
        for key in rules.keys() {
            if !known_rules.contains(key.as_str()) {
                warnings.push(format!("Unknown config option in [rules]: '{}'", key));
            }
        }
    }

    warnings
}

pub fn load_config_or_default(start_dir: &Path) -> Config {
    find_config_file(start_dir)
        .and_then(|path| load_config(&path).ok())
        .unwrap_or_default()
}

pub fn load_config_or_default_with_warnings(start_dir: &Path) -> ConfigResult {
    match find_config_file(start_dir) {
        Some(path) => load_config_with_warnings(&path).unwrap_or_default(),
        None => ConfigResult::default(),
    }
}
