//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_FILES: [&str; 2] = ["reverie.toml", ".reverie.toml"];
const ENV_PREFIX: &str = "REVERIE_";

/// Errors while loading configuration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `REVERIE_SECTION__KEY`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./reverie.toml` or `./.reverie.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/reverie/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigLoadError> {
        // Toml::file skips missing files; an explicit path has to exist
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(ConfigLoadError::NotFound(path.clone()));
        }

        let config = Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)?;
        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/reverie/config.toml if set,
    /// otherwise falls back to ~/.config/reverie/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("reverie").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./reverie.toml or ./.reverie.toml");
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

    fn write_toml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn extract(figment: Figment) -> FileConfig {
        figment.extract().unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.provider.model, "gpt-4");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("reverie"));
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = write_toml(
            &dir,
            "global.toml",
            "[provider]\nmodel = \"gpt-4o\"\nbase_url = \"http://global\"\n",
        );
        let project = write_toml(&dir, "reverie.toml", "[provider]\nmodel = \"gpt-4o-mini\"\n");

        let config = extract(ConfigLoader::figment(
            Some(global.as_path()),
            Some(project.as_path()),
            None,
        ));

        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.provider.base_url, "http://global");
        assert!(config.output.color);
    }

    #[test]
    fn test_explicit_path_wins_over_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(&dir, "reverie.toml", "[cards]\npath = \"project.csv\"\n");
        let explicit = write_toml(&dir, "custom.toml", "[cards]\npath = \"custom.csv\"\n");

        let config = extract(ConfigLoader::figment(
            None,
            Some(project.as_path()),
            Some(explicit.as_path()),
        ));

        assert_eq!(config.cards.path, PathBuf::from("custom.csv"));
    }

    #[test]
    fn test_missing_global_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let config = extract(ConfigLoader::figment(Some(missing.as_path()), None, None));
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let result = ConfigLoader::load(Some(&missing));
        assert!(matches!(result, Err(ConfigLoadError::NotFound(_))));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = write_toml(&dir, "bad.toml", "[output]\ncolor = \"sometimes\"\n");

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(explicit.as_path())).extract();
        assert!(result.is_err());
    }
}
