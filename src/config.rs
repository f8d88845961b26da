use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up in a directory
pub const CONFIG_FILE: &str = "boil.toml";

/// Main configuration structure for boil
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plates: PlatesConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}

/// Where templates come from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatesConfig {
    /// Plates directory or catalog file; built-in plates when unset
    pub path: Option<PathBuf>,
    pub cache_capacity: u64,
}

/// Defaults for generation flags not given on the command line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub newlines: bool,
    pub spaces: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for PlatesConfig {
    fn default() -> Self {
        Self {
            path: None,
            cache_capacity: 64,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(), // pretty, json, compact
        }
    }
}

impl Config {
    /// Load configuration from multiple sources with precedence:
    /// 1. Direct environment variables (BOIL_PLATES_PATH)
    /// 2. Structured environment variables (BOIL_<SECTION>__<KEY>)
    /// 3. boil.toml in the current directory (if exists)
    /// 4. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&std::env::current_dir()?)
    }

    /// Load configuration from a specific directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        let config_file = dir.join(CONFIG_FILE);
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file));
        }

        builder = builder.add_source(
            Environment::with_prefix("BOIL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut result: Config = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to read configuration")?;

        result.merge_env_vars();

        Ok(result)
    }

    fn merge_env_vars(&mut self) {
        if let Ok(path) = std::env::var("BOIL_PLATES_PATH") {
            if !path.trim().is_empty() {
                self.plates.path = Some(PathBuf::from(path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs::write;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "BOIL_PLATES_PATH",
        "BOIL_PLATES__PATH",
        "BOIL_PLATES__CACHE_CAPACITY",
        "BOIL_GENERATION__NEWLINES",
        "BOIL_GENERATION__SPACES",
        "BOIL_LOGGING__LEVEL",
        "BOIL_LOGGING__FORMAT",
    ];

    // Serializes tests that touch the process environment
    fn with_isolated_env<T>(f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<_> = VARS.iter().map(|key| (*key, env::var(key).ok())).collect();

        unsafe {
            for key in VARS {
                env::remove_var(key);
            }
        }

        let result = f();

        unsafe {
            for (key, value) in saved {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }

        result
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.plates.path, None);
        assert_eq!(config.plates.cache_capacity, 64);
        assert!(!config.generation.newlines);
        assert_eq!(config.generation.spaces, 0);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_load_from_toml_file() -> Result<()> {
        with_isolated_env(|| -> Result<()> {
            let temp_dir = TempDir::new()?;
            write(
                temp_dir.path().join(CONFIG_FILE),
                r#"
[plates]
path = "/opt/plates"

[generation]
newlines = true
spaces = 4

[logging]
level = "debug"
"#,
            )?;

            let config = Config::load_from_dir(temp_dir.path())?;

            assert_eq!(config.plates.path, Some(PathBuf::from("/opt/plates")));
            assert_eq!(config.plates.cache_capacity, 64);
            assert!(config.generation.newlines);
            assert_eq!(config.generation.spaces, 4);
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.logging.format, "compact");

            Ok(())
        })
    }

    #[test]
    fn test_precedence_env_over_file() -> Result<()> {
        with_isolated_env(|| -> Result<()> {
            let temp_dir = TempDir::new()?;
            write(
                temp_dir.path().join(CONFIG_FILE),
                "[generation]\nspaces = 4\nnewlines = true\n",
            )?;

            unsafe {
                env::set_var("BOIL_GENERATION__SPACES", "2");
                env::set_var("BOIL_PLATES_PATH", "/env/plates");
            }

            let config = Config::load_from_dir(temp_dir.path())?;

            assert_eq!(config.generation.spaces, 2);
            assert!(config.generation.newlines);
            assert_eq!(config.plates.path, Some(PathBuf::from("/env/plates")));

            Ok(())
        })
    }

    #[test]
    fn test_load_no_config_file() -> Result<()> {
        with_isolated_env(|| -> Result<()> {
            let temp_dir = TempDir::new()?;

            let config = Config::load_from_dir(temp_dir.path())?;

            assert_eq!(config.plates.path, None);
            assert_eq!(config.generation.spaces, 0);

            Ok(())
        })
    }
}
