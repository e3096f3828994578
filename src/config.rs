use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audit::AuditOptions;

const CONFIG_DIR: &str = "bgpaint";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid ignore selector '{0}': use #id, .class or a tag name")]
    InvalidSelector(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Skip nodes hidden via display/visibility/opacity
    pub skip_hidden: bool,
    /// Only check nodes that carry text
    pub text_only: bool,
    /// Exit with status 1 when any finding is reported
    pub fail_on_incomplete: bool,
    pub ignore_selectors: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            text_only: false,
            fail_on_incomplete: false,
            ignore_selectors: Vec::new(),
        }
    }
}

impl Config {
    /// Load from an explicit path, else the central config if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::central_config_path() {
            Some(central) if central.is_file() => Self::from_file(&central),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// `$XDG_CONFIG_HOME/bgpaint/config.toml`, falling back to `~/.config/bgpaint/config.toml`.
    pub fn central_config_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME")
                    .filter(|v| !v.is_empty())
                    .map(|home| PathBuf::from(home).join(".config"))
            })?;
        Some(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for selector in &self.audit.ignore_selectors {
            validate_selector(selector)?;
        }
        Ok(())
    }

    pub fn audit_options(&self) -> AuditOptions {
        AuditOptions {
            ignore_selectors: self
                .audit
                .ignore_selectors
                .iter()
                .map(|s| s.trim().to_ascii_lowercase())
                .collect(),
            skip_hidden: self.audit.skip_hidden,
            text_only: self.audit.text_only,
        }
    }
}

/// Accepts `#id`, `.class`, or a bare tag name.
pub fn validate_selector(selector: &str) -> Result<(), ConfigError> {
    let trimmed = selector.trim();
    let body = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix('.'))
        .unwrap_or(trimmed);
    let valid = !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidSelector(selector.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_match_expected() {
        let cfg = Config::default();

        assert!(cfg.audit.skip_hidden);
        assert!(!cfg.audit.text_only);
        assert!(!cfg.audit.fail_on_incomplete);
        assert!(cfg.audit.ignore_selectors.is_empty());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = Config::from_toml("[audit]\nfail_on_incomplete = true\n").expect("parse");
        assert!(cfg.audit.fail_on_incomplete);
        assert!(cfg.audit.skip_hidden);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml("").expect("parse"), Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("[audit]\nthreshold = 0.9\n").unwrap_err();
        assert!(err.to_string().contains("unknown field"), "{err}");
    }

    #[test]
    fn audit_options_normalize_selectors() {
        let cfg = Config::from_toml(
            "[audit]\nskip_hidden = false\nignore_selectors = [\" #Hero \", \".Ad\", \"P\"]\n",
        )
        .expect("parse");
        cfg.validate().expect("valid selectors");
        let options = cfg.audit_options();
        assert!(!options.skip_hidden);
        assert_eq!(options.ignore_selectors, vec!["#hero", ".ad", "p"]);
    }

    #[test]
    fn validate_rejects_compound_selectors() {
        for bad in ["", "#", "div p", "ul > li", ".a.b", "[role=img]"] {
            assert!(validate_selector(bad).is_err(), "{bad:?} should be rejected");
        }
        for good in ["#hero", ".ad-slot", "img", "custom-element"] {
            assert!(validate_selector(good).is_ok(), "{good:?} should be accepted");
        }
    }

    #[test]
    fn load_reads_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bgpaint.toml");
        std::fs::write(&path, "[audit]\ntext_only = true\n").unwrap();
        let cfg = Config::load(Some(path.as_path())).expect("load");
        assert!(cfg.audit.text_only);
    }

    #[test]
    fn load_reports_missing_explicit_path() {
        let err = Config::load(Some(Path::new("no-such-config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
