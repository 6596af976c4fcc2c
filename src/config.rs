use std::path::Path;

use ::config::{File, FileFormat};

/// Base name of the configuration file; `config`, `config.yaml` and `config.yml` all match.
pub const CONFIG_FILE_STEM: &str = "config";

/// Read-only key/value configuration loaded from an optional YAML file.
///
/// Nested mappings are reachable through dotted keys (`owner.name`). Lookups
/// never fail: anything absent reads back as `""`.
#[derive(Debug, Default, Clone)]
pub struct Config {
    settings: ::config::Config,
}

impl Config {
    /// Loads configuration from the current directory. Never fails: a missing or
    /// unreadable file produces an empty configuration.
    pub fn load_best_effort() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Same contract as [`Config::load_best_effort`], rooted at `dir`.
    pub fn load_from_dir(dir: &Path) -> Self {
        let source = File::from(dir.join(CONFIG_FILE_STEM))
            .format(FileFormat::Yaml)
            .required(false);

        match ::config::Config::builder().add_source(source).build() {
            Ok(settings) => Self { settings },
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "ignoring configuration");
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ::config::ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(File::from_str(source, FileFormat::Yaml))
            .build()?;
        Ok(Self { settings })
    }

    /// Returns the value for `key` as a string, or an empty string.
    pub fn get(&self, key: &str) -> String {
        self.settings.get_string(key).unwrap_or_default()
    }
}
