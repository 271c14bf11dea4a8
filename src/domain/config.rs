use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info, LevelFilter};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::ConfigProvider;

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDO {
    color: Option<bool>,
    log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// The file the configuration was read from, if there was one.
    path: Option<PathBuf>,
    /// Whether terminal output is colored.
    color: bool,
    /// Default log level, before `-v` flags and `RUST_LOG` are applied.
    log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            path: None,
            color: true,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, or from the default location if no path is given.
    ///
    /// An explicitly given file must exist. A missing file at the default location falls back to
    /// the defaults.
    ///
    /// Platform-specific config file paths
    /// Linux: $XDG_CONFIG_HOME or $HOME/.config/gpa/config.toml
    /// macOS: $HOME/.config/gpa/config.toml
    /// Windows: {FOLDERID_RoamingAppData}\gpa\config.toml
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file '{}' does not exist", path.display());
                }
                Config::from_path(path)
            }
            None => {
                let path = Self::default_path()?;
                if path.is_file() {
                    Config::from_path(path)
                } else {
                    debug!("No config file at '{}', using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn from_path<P>(path: P) -> Result<Config>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = std::fs::read_to_string(path)
            .with_context(|| anyhow!("Failed to open config file: {}", path.display()))?;
        let mut config = Config::from_toml(&file)
            .with_context(|| anyhow!("Could not read config from: {}", path.display()))?;
        info!("Loaded config from '{}'", path.display());
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Config> {
        let config_do = toml_edit::de::from_str::<ConfigDO>(content)
            .with_context(|| anyhow!("Could not read Config from toml"))?;

        let defaults = Config::default();
        let log_level = match config_do.log_level {
            Some(level) => LevelFilter::from_str(&level)
                .map_err(|_| anyhow!("Unknown log level '{}'", level))?,
            None => defaults.log_level,
        };

        Ok(Config {
            path: None,
            color: config_do.color.unwrap_or(defaults.color),
            log_level,
        })
    }

    /// Writes the default config file to `path`. Refuses to overwrite an existing file.
    pub fn create_default_config_file<P>(path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.exists() {
            bail!("Config file '{}' already exists", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| anyhow!("Failed to create '{}'", parent.display()))?;
        }
        let config_content = include_str!("../../config.toml");
        std::fs::write(path, config_content).context("Failed to create config file")?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("gpa").join("config.toml"))
    }

    fn config_dir() -> Result<PathBuf> {
        if cfg!(target_os = "macos") {
            let home_dir =
                dirs::home_dir().context("Failed to find home directory on your system")?;
            Ok(home_dir.join(".config"))
        } else {
            dirs::config_dir().context("Failed to find config directory on your system.")
        }
    }

    pub fn disable_color(&mut self) {
        self.color = false;
    }
}

impl ConfigProvider for Config {
    fn path(&self) -> Option<PathBuf> {
        self.path.clone()
    }

    fn color(&self) -> bool {
        self.color
    }

    fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
