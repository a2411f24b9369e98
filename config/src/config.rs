//! # Configuration Store
//!
//! The flat parameter table for the cognitive server: built-in defaults,
//! file overrides, typed accessors, and the process-wide instance.

pub use crate::file_loader::{ConfigLoadError, read_config_file};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::path::Path;

/// Built-in parameter defaults, applied on construction and by
/// [`Config::reset`].
pub const DEFAULT_CONFIG: &[(&str, &str)] = &[
    ("SERVER_PORT", "17001"),
    ("LOG_FILE", "opencog_server.log"),
    ("LOG_LEVEL", "info"),
    ("LOG_TO_STDOUT", "true"),
    ("SERVER_CYCLE_DURATION", "100"), // in milliseconds
    ("IDLE_CYCLES_PER_TICK", "3"),
    ("STARTING_STI_FUNDS", "10000"),
    ("STARTING_LTI_FUNDS", "10000"),
    ("STI_FUNDS_BUFFER", "10000"),
    ("LTI_FUNDS_BUFFER", "10000"),
    ("MIN_STI", "-400"),
];

/// Shared fallback for [`Config::get`] on an unset parameter.
const EMPTY_VALUE: &str = "";

/// Typed accessor error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValueError {
    #[error("Unknown configuration parameter: {name}")]
    KeyNotFound { name: String },

    #[error("Parameter {name} has value {value:?}, expected {expected}")]
    TypeError {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// Process-wide configuration store.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Holds the server's named string parameters: seeded from
/// [`DEFAULT_CONFIG`], optionally overridden by [`Config::load`], and read
/// through typed accessors.
///
/// ## Usage
/// ```rust
/// use config::Config;
///
/// let config = Config::new();
/// assert_eq!(config.get("SERVER_PORT"), "17001");
/// assert_eq!(config.get_int("SERVER_PORT").unwrap(), 17001);
/// ```
///
/// ## Concurrency
/// The store itself performs no locking. Shared use goes through the
/// process-wide [`config()`] accessor, which wraps one instance in an
/// `RwLock`; direct instances need external synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Parameter name to value
    table: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut config = Self {
            table: BTreeMap::new(),
        };
        config.reset();
        config
    }
}

impl Config {
    /// Create a store populated with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the built-in defaults, discarding any loaded overrides.
    pub fn reset(&mut self) {
        self.table.clear();
        for (key, value) in DEFAULT_CONFIG {
            self.table.insert((*key).to_string(), (*value).to_string());
        }
    }

    /// Load `path` and redefine the parameters it mentions.
    ///
    /// # M-CANONICAL-DOCS
    ///
    /// ## Purpose
    /// Applies a configuration file on top of the current table. Parameters
    /// named in the file are overwritten; all others keep their prior values.
    /// Loading twice applies last-load-wins per parameter.
    ///
    /// ## Error Handling
    /// Returns [`ConfigLoadError`] for an unreadable file or a malformed
    /// line. The file is parsed in full before any override is applied, so a
    /// failed load leaves the table unchanged. Callers should still treat a
    /// failure as fatal to the startup sequence that needed the file.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigLoadError> {
        let path = path.as_ref();
        let overrides = read_config_file(path)?;

        let applied = overrides.len();
        for (key, value) in overrides {
            tracing::debug!("Configuration override {} = {}", key, value);
            self.table.insert(key, value);
        }
        tracing::info!(
            "Loaded {} configuration overrides from {}",
            applied,
            path.display()
        );

        Ok(())
    }

    /// Current value of `name`, or `""` when the parameter is unset.
    ///
    /// Unset parameters deliberately read as the empty string rather than
    /// failing; long-standing call sites treat "unset" and "empty" alike.
    /// Use [`Config::try_get`] where an unset parameter should be an error.
    pub fn get(&self, name: &str) -> &str {
        self.table.get(name).map_or(EMPTY_VALUE, String::as_str)
    }

    /// Current value of `name`, or [`ConfigValueError::KeyNotFound`].
    pub fn try_get(&self, name: &str) -> Result<&str, ConfigValueError> {
        self.table
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigValueError::KeyNotFound {
                name: name.to_string(),
            })
    }

    /// Current value of `name` parsed as a base-10 integer.
    pub fn get_int(&self, name: &str) -> Result<i64, ConfigValueError> {
        let value = self.try_get(name)?;
        value
            .parse::<i64>()
            .map_err(|_| ConfigValueError::TypeError {
                name: name.to_string(),
                value: value.to_string(),
                expected: "an integer",
            })
    }

    /// Current value of `name` parsed as a floating-point number.
    pub fn get_double(&self, name: &str) -> Result<f64, ConfigValueError> {
        let value = self.try_get(name)?;
        value
            .parse::<f64>()
            .map_err(|_| ConfigValueError::TypeError {
                name: name.to_string(),
                value: value.to_string(),
                expected: "a floating-point number",
            })
    }

    /// Current value of `name` parsed as a boolean.
    ///
    /// Only the exact, case-sensitive literals `true` and `false` parse.
    pub fn get_bool(&self, name: &str) -> Result<bool, ConfigValueError> {
        match self.try_get(name)? {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ConfigValueError::TypeError {
                name: name.to_string(),
                value: other.to_string(),
                expected: "\"true\" or \"false\"",
            }),
        }
    }
}

/// Dump of all parameters, one `key = value` per line in lexicographic key
/// order. The output re-parses as a configuration file.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.table {
            writeln!(f, "{} = {}", key, value)?;
        }
        Ok(())
    }
}

/// Indexing sugar with [`Config::get`] semantics: `&config["SERVER_PORT"]`.
impl Index<&str> for Config {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        self.get(name)
    }
}

static GLOBAL_CONFIG: once_cell::sync::Lazy<RwLock<Config>> =
    once_cell::sync::Lazy::new(|| RwLock::new(Config::default()));

/// Process-wide configuration instance.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Lazily constructs one shared [`Config`] with the defaults applied and
/// returns it on every call for the life of the process.
///
/// ## Usage
/// ```rust
/// use config::config;
///
/// let port = config().read().get_int("SERVER_PORT").unwrap();
/// assert_eq!(port, 17001);
/// ```
///
/// ## Concurrency
/// First-call construction is race-free. The `RwLock` serializes `load`
/// against readers, but readers taking separate `read()` guards can observe
/// different loads; there is no cross-call snapshot.
pub fn config() -> &'static RwLock<Config> {
    &GLOBAL_CONFIG
}
