//! Client configuration and source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use orthoquiz_core::locale::Language;
use orthoquiz_core::traits::QuizSource;

use crate::http::{HttpQuizSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Top-level orthoquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrthoquizConfig {
    /// Base URL of the platform API (quizzes live under `/quizzes`).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Interface language for quiz text.
    #[serde(default)]
    pub language: Language,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Output directory for fetched quizzes and attempt reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./orthoquiz-results")
}

impl Default for OrthoquizConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            language: Language::default(),
            timeout_secs: default_timeout(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `orthoquiz.toml` in the current directory
/// 2. `~/.config/orthoquiz/config.toml`
///
/// Environment variable overrides: `ORTHOQUIZ_API_URL`, `ORTHOQUIZ_LANG`.
pub fn load_config_from(path: Option<&Path>) -> Result<OrthoquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("orthoquiz.toml");
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
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<OrthoquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => OrthoquizConfig::default(),
    };

    if let Ok(url) = std::env::var("ORTHOQUIZ_API_URL") {
        config.api_base_url = url;
    }
    if let Ok(lang) = std::env::var("ORTHOQUIZ_LANG") {
        config.language = lang
            .parse()
            .map_err(|e: String| anyhow::anyhow!("ORTHOQUIZ_LANG: {e}"))?;
    }

    config.api_base_url = resolve_env_vars(&config.api_base_url);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("orthoquiz"))
}

/// Create the backend quiz source described by the configuration.
pub fn create_source(config: &OrthoquizConfig) -> Result<Box<dyn QuizSource>> {
    tracing::debug!(api = %config.api_base_url, "using HTTP quiz source");
    Ok(Box::new(HttpQuizSource::new(
        &config.api_base_url,
        config.timeout_secs,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_ORTHOQUIZ_TEST_HOST", "api.example.org");
        assert_eq!(
            resolve_env_vars("https://${_ORTHOQUIZ_TEST_HOST}/api"),
            "https://api.example.org/api"
        );
        assert_eq!(resolve_env_vars("no vars"), "no vars");
        assert_eq!(resolve_env_vars("broken ${OPEN"), "broken ${OPEN");
        std::env::remove_var("_ORTHOQUIZ_TEST_HOST");
    }

    #[test]
    fn resolve_env_vars_does_not_reexpand_values() {
        std::env::set_var("_ORTHOQUIZ_TEST_SELF", "${_ORTHOQUIZ_TEST_SELF}");
        std::env::set_var("_ORTHOQUIZ_TEST_PORT", "8080");
        assert_eq!(
            resolve_env_vars("http://${_ORTHOQUIZ_TEST_SELF}:${_ORTHOQUIZ_TEST_PORT}/api"),
            "http://${_ORTHOQUIZ_TEST_SELF}:8080/api"
        );
        std::env::remove_var("_ORTHOQUIZ_TEST_SELF");
        std::env::remove_var("_ORTHOQUIZ_TEST_PORT");
    }

    #[test]
    fn default_config() {
        let config = OrthoquizConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn parse_config_file() {
        let toml_str = r#"
api_base_url = "https://platform.example.org/api"
language = "AM"
timeout_secs = 10
"#;
        let config: OrthoquizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.language, Language::Am);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.output_dir, PathBuf::from("./orthoquiz-results"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/orthoquiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "timeout_secs = 7\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn create_source_from_config() {
        let source = create_source(&OrthoquizConfig::default()).unwrap();
        assert_eq!(source.name(), "http");
    }
}
