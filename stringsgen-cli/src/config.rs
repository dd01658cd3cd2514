//! `stringsgen.toml` project configuration.
//!
//! ```toml
//! inputs = ["Resources/en.lproj/Localizable.strings"]
//! output = "Sources/Generated/L10n.swift"
//! enum_name = "L10n"
//! indentation = "spaces:4"
//! sort = false
//! strict = true
//! ```
//!
//! Every key is optional; command-line flags win over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use stringsgen::{EmitOptions, FormatType, Indentation};
use tracing::debug;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "stringsgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub inputs: Option<Vec<String>>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub enum_name: Option<String>,
    pub indentation: Option<Indentation>,
    pub sort: Option<bool>,
    pub strict: Option<bool>,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid configuration: {}", e))
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
        Self::from_toml_str(&content).map_err(|e| format!("{} ({})", e, path.display()))
    }

    /// Loads `explicit`, or the default file if it exists, or an empty config.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        match explicit {
            Some(path) => Self::read_from(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    debug!(path = %default.display(), "using default config file");
                    Self::read_from(default)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Command-line values that may override the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub inputs: Vec<String>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub enum_name: Option<String>,
    pub indentation: Option<String>,
    pub sort: bool,
    pub strict: bool,
}

/// Fully resolved settings of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub inputs: Vec<String>,
    pub output: Option<String>,
    pub format: Option<FormatType>,
    pub emit: EmitOptions,
    pub sort: bool,
    pub strict: bool,
}

impl Settings {
    pub fn resolve(config: Config, overrides: Overrides) -> Result<Self, String> {
        let inputs = if overrides.inputs.is_empty() {
            config.inputs.unwrap_or_default()
        } else {
            overrides.inputs
        };

        let format = overrides
            .format
            .or(config.format)
            .map(|f| f.parse::<FormatType>().map_err(|e| e.to_string()))
            .transpose()?;

        let indentation = match overrides.indentation {
            Some(spec) => spec.parse::<Indentation>().map_err(|e| e.to_string())?,
            None => config.indentation.unwrap_or_default(),
        };

        let defaults = EmitOptions::default();
        Ok(Settings {
            inputs,
            output: overrides.output.or(config.output),
            format,
            emit: EmitOptions {
                enum_name: overrides
                    .enum_name
                    .or(config.enum_name)
                    .unwrap_or(defaults.enum_name),
                indentation,
            },
            sort: overrides.sort || config.sort.unwrap_or(false),
            strict: overrides.strict || config.strict.unwrap_or(false),
        })
    }
}
