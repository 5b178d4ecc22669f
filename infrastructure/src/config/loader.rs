//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILENAMES: [&str; 2] = ["duet.toml", ".duet.toml"];
const ENV_PREFIX: &str = "DUET_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DUET_*` environment variables (`DUET_RETRY__MAX_RETRIES=5`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./duet.toml` or `./.duet.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/duet/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path();
        let project = Self::project_config_path();
        Self::figment(
            global.as_deref(),
            project.as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
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

        // A missing explicit file is an error, not a silent skip
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("duet").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [ env ] {}* environment variables", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./duet.toml or ./.duet.toml");
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
    use std::fs;

    fn extract(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> FileConfig {
        ConfigLoader::figment(global, project, explicit)
            .extract()
            .unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.retry.max_retries, 3);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.ends_with("duet/config.toml"));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let config = extract(Some(&missing), None, None);
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("duet.toml");
        fs::write(
            &global,
            "[retry]\nmax_retries = 7\n\n[backends.groq]\nmodel = \"from-global\"\n",
        )
        .unwrap();
        fs::write(&project, "[retry]\nmax_retries = 2\n").unwrap();

        let config = extract(Some(&global), Some(&project), None);
        assert_eq!(config.retry.max_retries, 2);
        assert_eq!(config.backends.groq.model, "from-global");
    }

    #[test]
    fn test_explicit_overrides_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("duet.toml");
        let explicit = dir.path().join("custom.toml");
        fs::write(&project, "[output]\ncolor = false\nshow_progress = false\n").unwrap();
        fs::write(&explicit, "[output]\ncolor = true\n").unwrap();

        let config = extract(None, Some(&project), Some(&explicit));
        assert!(config.output.color);
        assert!(!config.output.show_progress);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("absent.toml");
        let result = ConfigLoader::figment(None, None, Some(&explicit)).extract::<FileConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("duet.toml");
        fs::write(&project, "[retry]\nmax_retries = \"many\"\n").unwrap();
        let result = ConfigLoader::figment(None, Some(&project), None).extract::<FileConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_project_config_prefers_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::project_config_in(dir.path()).is_none());

        fs::write(dir.path().join(".duet.toml"), "").unwrap();
        let found = ConfigLoader::project_config_in(dir.path()).unwrap();
        assert!(found.ends_with(".duet.toml"));

        fs::write(dir.path().join("duet.toml"), "").unwrap();
        let found = ConfigLoader::project_config_in(dir.path()).unwrap();
        assert!(found.ends_with("duet.toml"));
        assert!(!found.ends_with(".duet.toml"));
    }
}
