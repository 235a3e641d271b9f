//! answerkey configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::parse_max_errors;

/// Environment variable that overrides the configured seed.
pub const SEED_ENV: &str = "ANSWERKEY_SEED";

/// Top-level answerkey configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerkeyConfig {
    /// Default ceiling for injected errors per student.
    #[serde(default, deserialize_with = "deserialize_max_errors")]
    pub max_errors: u32,
    /// Directory the answer files and run summary are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Fixed random seed; a fresh one is drawn per run when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Appended to each student id to form the answer file name.
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,
}

/// Accept the same values as `--max-errors`, with the same error.
fn deserialize_max_errors<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = match Raw::deserialize(deserializer)? {
        Raw::Int(n) => n.to_string(),
        Raw::Float(x) => x.to_string(),
        Raw::Text(s) => s,
    };
    parse_max_errors(&raw).map_err(serde::de::Error::custom)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./answerkey-output")
}
fn default_file_suffix() -> String {
    "_answers.txt".to_string()
}

impl Default for AnswerkeyConfig {
    fn default() -> Self {
        Self {
            max_errors: 0,
            output_dir: default_output_dir(),
            seed: None,
            file_suffix: default_file_suffix(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `answerkey.toml` in the current directory
/// 2. `~/.config/answerkey/config.toml`
///
/// Environment variable override: `ANSWERKEY_SEED`.
pub fn load_config() -> Result<AnswerkeyConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<AnswerkeyConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("answerkey.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config_str(
                &std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?,
            )
            .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => AnswerkeyConfig::default(),
    };

    if let Ok(raw) = std::env::var(SEED_ENV) {
        let seed = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got '{raw}'"))?;
        config.seed = Some(seed);
    }

    Ok(config)
}

/// Parse configuration TOML.
pub fn parse_config_str(content: &str) -> Result<AnswerkeyConfig> {
    Ok(toml::from_str::<AnswerkeyConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("answerkey"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AnswerkeyConfig::default();
        assert_eq!(config.max_errors, 0);
        assert_eq!(config.file_suffix, "_answers.txt");
        assert!(config.seed.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str("max_errors = 4\nseed = 17\n").unwrap();
        assert_eq!(config.max_errors, 4);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.output_dir, PathBuf::from("./answerkey-output"));
    }

    #[test]
    fn negative_max_errors_rejected() {
        let err = parse_config_str("max_errors = -2\n").unwrap_err();
        assert!(err.to_string().contains("invalid max errors value: '-2'"));
    }

    #[test]
    fn malformed_max_errors_uses_typed_message() {
        for bad in ["max_errors = 2.5\n", "max_errors = \"lots\"\n"] {
            let err = parse_config_str(bad).unwrap_err();
            assert!(err.to_string().contains("invalid max errors value"), "{err}");
        }
        assert_eq!(parse_config_str("max_errors = \"3\"\n").unwrap().max_errors, 3);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("no-such-answerkey.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answerkey.toml");
        std::fs::write(&path, "output_dir = \"keys\"\nfile_suffix = \".key\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("keys"));
        assert_eq!(config.file_suffix, ".key");
    }
}
