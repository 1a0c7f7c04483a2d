use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Config, ConfigError, parse_config};

/// Local file names, most preferred first.
const LOCAL_CONFIG_NAMES: [&str; 2] = ["cmdpat.yml", "cmdpat.yaml"];

pub trait ConfigLoader {
    fn load(&self, cwd: &Path) -> Result<Config, ConfigError>;
}

/// A config file that takes part in loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Per-user file under `$HOME`.
    Global(PathBuf),
    /// File in the working directory. Overrides the global one.
    Local(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Global(path) | ConfigSource::Local(path) => path,
        }
    }

    fn read(&self) -> Result<Config, ConfigError> {
        debug!(source = %self, "reading config");
        let yaml = std::fs::read_to_string(self.path())?;
        parse_config(&yaml)
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ConfigSource::Global(_) => "global",
            ConfigSource::Local(_) => "local",
        };
        write!(f, "{kind} {}", self.path().display())
    }
}

/// Reads the global file and the first local file found in `cwd`, in that
/// order, and merges them.
pub struct DefaultConfigLoader {
    global_config_path: Option<PathBuf>,
}

impl Default for DefaultConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultConfigLoader {
    pub fn new() -> Self {
        let global_config_path = std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("cmdpat")
                    .join("cmdpat.yml")
            });
        Self { global_config_path }
    }

    pub fn with_global_path(path: PathBuf) -> Self {
        Self {
            global_config_path: Some(path),
        }
    }

    /// Existing config files for `cwd`, in merge order.
    pub fn sources(&self, cwd: &Path) -> Vec<ConfigSource> {
        let global = self
            .global_config_path
            .iter()
            .filter(|path| path.is_file())
            .map(|path| ConfigSource::Global(path.clone()));
        let local = LOCAL_CONFIG_NAMES
            .iter()
            .map(|name| cwd.join(name))
            .find(|path| path.is_file())
            .map(ConfigSource::Local);
        global.chain(local).collect()
    }
}

impl ConfigLoader for DefaultConfigLoader {
    fn load(&self, cwd: &Path) -> Result<Config, ConfigError> {
        let sources = self.sources(cwd);
        if sources.is_empty() {
            debug!(cwd = %cwd.display(), "no config files found");
        }
        let config = sources
            .iter()
            .try_fold(Config::default(), |merged, source| {
                Ok::<_, ConfigError>(merged.merge(source.read()?))
            })?;
        config.validate()?;
        Ok(config)
    }
}
