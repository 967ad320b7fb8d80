//! Optional user configuration file.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    tui::state::{PageId, ThemeMode},
};

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio-tui/config.json")
}

/// Settings read from `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: Option<ThemeMode>,
    pub page: Option<PageId>,
    pub animations: Option<bool>,
}

/// Command-line overrides for [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub theme: Option<ThemeMode>,
    pub page: Option<PageId>,
    pub no_animation: bool,
}

/// Effective startup settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: ThemeMode,
    pub page: PageId,
    pub animations: bool,
}

impl Config {
    /// Load the user's config file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::from_path(&config_path())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Command line over file over built-in defaults.
    pub fn resolve(&self, overrides: Overrides) -> Settings {
        Settings {
            theme: overrides.theme.or(self.theme).unwrap_or_default(),
            page: overrides.page.or(self.page).unwrap_or_default(),
            animations: !overrides.no_animation && self.animations.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A config file in its own temp directory, removed on drop.
    struct Scratch {
        dir: PathBuf,
        path: PathBuf,
    }

    impl Scratch {
        fn new(name: &str, contents: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("portfolio-tui-test-{}-{name}", std::process::id()));
            fs::create_dir_all(&dir).expect("scratch dir");
            let path = dir.join("config.json");
            fs::write(&path, contents).expect("write config");
            Self { dir, path }
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn scratch_files_are_removed_after_use() {
        let file = Scratch::new("cleanup", "{}");
        let dir = file.dir.clone();
        assert_eq!(Config::from_path(&file.path).expect("empty config"), Config::default());
        drop(file);
        assert!(!dir.exists());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("portfolio-tui-does-not-exist/config.json");
        let config = Config::from_path(&path).expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(
            config.resolve(Overrides::default()),
            Settings {
                theme: ThemeMode::Dark,
                page: PageId::Home,
                animations: true,
            }
        );
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let file = Scratch::new("partial", r#"{ "theme": "light", "page": "edu_exp" }"#);
        let config = Config::from_path(&file.path).expect("config");
        assert_eq!(config.theme, Some(ThemeMode::Light));
        assert_eq!(config.page, Some(PageId::EduExp));
        assert_eq!(config.animations, None);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let file = Scratch::new("bad", r#"{ "theme": "sepia" }"#);
        let err = Config::from_path(&file.path).expect_err("invalid theme");
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("Expected fields"));
    }

    #[test]
    fn command_line_wins_over_file() {
        let config = Config {
            theme: Some(ThemeMode::Light),
            page: Some(PageId::Projects),
            animations: Some(true),
        };
        let settings = config.resolve(Overrides {
            theme: Some(ThemeMode::Dark),
            page: None,
            no_animation: true,
        });
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.page, PageId::Projects);
        assert!(!settings.animations);
    }
}
