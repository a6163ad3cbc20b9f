//! Client configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hifz_core::traits::{DEFAULT_AUDIO_BASE_URL, DEFAULT_AUDIO_FORMAT, DEFAULT_RECITER};
use hifz_core::QuizSetConfig;

/// Top-level hifz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HifzConfig {
    /// Scripture service API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Edition used for the original-language text.
    #[serde(default = "default_original_edition")]
    pub original_edition: String,
    /// Edition used for the translation shown next to each verse.
    #[serde(default = "default_translation_edition")]
    pub translation_edition: String,
    /// Language code for keyword search.
    #[serde(default = "default_search_language")]
    pub search_language: String,
    /// Recitation host and path prefix.
    #[serde(default = "default_audio_base_url")]
    pub audio_base_url: String,
    #[serde(default = "default_audio_format")]
    pub audio_format: String,
    /// Default reciter id.
    #[serde(default = "default_reciter")]
    pub reciter: String,
    /// Verses per quiz set unless the whole chapter is requested.
    #[serde(default = "default_max_quiz_verses")]
    pub max_quiz_verses: usize,
    /// Per-request timeout. Unset means requests may wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.alquran.cloud/v1".to_string()
}
fn default_original_edition() -> String {
    "quran-uthmani".to_string()
}
fn default_translation_edition() -> String {
    "en.asad".to_string()
}
fn default_search_language() -> String {
    "en".to_string()
}
fn default_audio_base_url() -> String {
    DEFAULT_AUDIO_BASE_URL.to_string()
}
fn default_audio_format() -> String {
    DEFAULT_AUDIO_FORMAT.to_string()
}
fn default_reciter() -> String {
    DEFAULT_RECITER.to_string()
}
fn default_max_quiz_verses() -> usize {
    10
}

impl Default for HifzConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            original_edition: default_original_edition(),
            translation_edition: default_translation_edition(),
            search_language: default_search_language(),
            audio_base_url: default_audio_base_url(),
            audio_format: default_audio_format(),
            reciter: default_reciter(),
            max_quiz_verses: default_max_quiz_verses(),
            request_timeout_secs: None,
        }
    }
}

impl HifzConfig {
    /// Builder settings derived from this configuration.
    pub fn quiz_set_config(&self) -> QuizSetConfig {
        QuizSetConfig {
            max_verses: self.max_quiz_verses,
            reciter: Some(self.reciter.clone()),
        }
    }

    fn resolve_env_vars(&mut self) {
        for field in [
            &mut self.base_url,
            &mut self.original_edition,
            &mut self.translation_edition,
            &mut self.search_language,
            &mut self.audio_base_url,
            &mut self.audio_format,
            &mut self.reciter,
        ] {
            *field = resolve_env_vars(field);
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Expansion is a single left-to-right pass; substituted values are not
/// scanned again.
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

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `hifz.toml` in the current directory
/// 2. `~/.config/hifz/config.toml`
///
/// Environment variable overrides: `HIFZ_BASE_URL`, `HIFZ_RECITER`.
pub fn load_config() -> Result<HifzConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<HifzConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("hifz.toml");
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
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => HifzConfig::default(),
    };

    if let Ok(url) = std::env::var("HIFZ_BASE_URL") {
        config.base_url = url;
    }
    if let Ok(reciter) = std::env::var("HIFZ_RECITER") {
        config.reciter = reciter;
    }

    config.resolve_env_vars();
    anyhow::ensure!(
        config.max_quiz_verses >= 1,
        "max_quiz_verses must be at least 1"
    );

    Ok(config)
}

/// Parse a TOML string into a configuration (env vars not yet resolved).
pub fn parse_config(content: &str) -> Result<HifzConfig> {
    Ok(toml::from_str::<HifzConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("hifz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_HIFZ_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_HIFZ_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_HIFZ_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        assert_eq!(
            resolve_env_vars("${_HIFZ_TEST_VAR}/${_HIFZ_TEST_VAR}"),
            "hello/hello"
        );
        std::env::remove_var("_HIFZ_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_reexpand_values() {
        std::env::set_var("_HIFZ_SELF_REF", "${_HIFZ_SELF_REF}");
        assert_eq!(resolve_env_vars("${_HIFZ_SELF_REF}"), "${_HIFZ_SELF_REF}");
        assert_eq!(
            resolve_env_vars("ar.${_HIFZ_SELF_REF}.x"),
            "ar.${_HIFZ_SELF_REF}.x"
        );
        std::env::remove_var("_HIFZ_SELF_REF");
    }

    #[test]
    fn default_config() {
        let config = HifzConfig::default();
        assert_eq!(config.base_url, "https://api.alquran.cloud/v1");
        assert_eq!(config.original_edition, "quran-uthmani");
        assert_eq!(config.translation_edition, "en.asad");
        assert_eq!(config.reciter, "ar.alafasy");
        assert_eq!(config.max_quiz_verses, 10);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
translation_edition = "en.sahih"
max_quiz_verses = 5
request_timeout_secs = 30
"#,
        )
        .unwrap();
        assert_eq!(config.translation_edition, "en.sahih");
        assert_eq!(config.max_quiz_verses, 5);
        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(config.original_edition, "quran-uthmani");

        let quiz = config.quiz_set_config();
        assert_eq!(quiz.max_verses, 5);
        assert_eq!(quiz.reciter.as_deref(), Some("ar.alafasy"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/hifz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hifz.toml");
        std::fs::write(&path, "audio_format = \"ogg\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.audio_format, "ogg");
    }

    #[test]
    fn zero_verses_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hifz.toml");
        std::fs::write(&path, "max_quiz_verses = 0\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
