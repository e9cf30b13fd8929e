//! Configuration schema for toolcache
//!
//! Configuration is stored at `~/.config/toolcache/config.toml`

use crate::cache::{host_arch, ToolCacheSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cache settings
    pub cache: CacheConfig,
}

impl Config {
    /// Build cache settings, letting explicit overrides win over the file
    pub fn settings(
        &self,
        root_override: Option<PathBuf>,
        arch_override: Option<String>,
    ) -> ToolCacheSettings {
        ToolCacheSettings {
            root: root_override
                .filter(|p| !p.as_os_str().is_empty())
                .or_else(|| self.cache.root.clone())
                .filter(|p| !p.as_os_str().is_empty()),
            arch: arch_override
                .or_else(|| self.cache.arch.clone())
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(host_arch),
        }
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root, used when neither --root nor RUNNER_TOOL_CACHE is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Default architecture (host architecture when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.general.log_format, "text");
        assert!(config.cache.root.is_none());
        assert!(config.cache.arch.is_none());
    }

    #[test]
    fn parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [cache]
            root = "/opt/hostedtoolcache"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.cache.root,
            Some(PathBuf::from("/opt/hostedtoolcache"))
        );
        assert_eq!(config.general.log_format, "text");
    }

    #[test]
    fn overrides_win() {
        let mut config = Config::default();
        config.cache.root = Some(PathBuf::from("/from/file"));
        config.cache.arch = Some("arm64".to_string());

        let settings = config.settings(Some(PathBuf::from("/from/env")), None);
        assert_eq!(settings.root, Some(PathBuf::from("/from/env")));
        assert_eq!(settings.arch, "arm64");

        let settings = config.settings(None, Some("x86".to_string()));
        assert_eq!(settings.root, Some(PathBuf::from("/from/file")));
        assert_eq!(settings.arch, "x86");
    }

    #[test]
    fn empty_root_is_unset() {
        let settings = Config::default().settings(Some(PathBuf::new()), None);
        assert!(settings.root.is_none());
    }

    #[test]
    fn empty_root_override_falls_back_to_file() {
        let mut config = Config::default();
        config.cache.root = Some(PathBuf::from("/from/file"));

        let settings = config.settings(Some(PathBuf::new()), None);
        assert_eq!(settings.root, Some(PathBuf::from("/from/file")));

        config.cache.root = Some(PathBuf::new());
        let settings = config.settings(Some(PathBuf::new()), None);
        assert!(settings.root.is_none());
    }

    #[test]
    fn missing_values_fall_back() {
        let settings = Config::default().settings(None, None);
        assert!(settings.root.is_none());
        assert_eq!(settings.arch, host_arch());
    }
}
