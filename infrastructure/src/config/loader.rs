//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application directory name under the platform config dir
const APP_DIR: &str = "agentic-gemini";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["agentic.toml", ".agentic.toml"];

/// Prefix for environment overrides
const ENV_PREFIX: &str = "AGENTIC_";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),

    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `AGENTIC_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided; must exist)
    /// 3. Project root: `./agentic.toml` or `./.agentic.toml`
    /// 4. Global: `~/.config/agentic-gemini/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(figment)
    }

    /// Load defaults merged with a single file, ignoring every other source
    pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path));
        Self::extract(figment)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path (`~/.config/agentic-gemini/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default REPL history location (`<data dir>/agentic-gemini/history.txt`)
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }

    /// Render a configuration as TOML
    pub fn render(config: &FileConfig) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(config)?)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./agentic.toml or ./.agentic.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.model.name, "gemini-2.5-pro");
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let file = config_file(
            r#"
[model]
name = "gemini-2.5-flash"

[repl]
show_progress = false
"#,
        );

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert_eq!(config.model.api_key_env, "GOOGLE_API_KEY");
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_load_file_rejects_invalid_values() {
        let file = config_file("[model]\nname = \"\"\n");
        assert!(matches!(
            ConfigLoader::load_file(file.path()),
            Err(ConfigError::Invalid(ConfigValidationError::EmptyModelName))
        ));
    }

    #[test]
    fn test_load_file_reports_type_errors() {
        let file = config_file("[repl]\nshow_progress = \"sometimes\"\n");
        assert!(matches!(
            ConfigLoader::load_file(file.path()),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let missing = Path::new("/definitely/not/here/agentic.toml");
        assert!(matches!(
            ConfigLoader::load(Some(missing)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_render_roundtrip() {
        let rendered = ConfigLoader::render(&FileConfig::default()).unwrap();
        assert!(rendered.contains("[model]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.model.name, "gemini-2.5-pro");
    }

    #[test]
    fn test_global_config_path() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("agentic-gemini"));
        }
    }
}
