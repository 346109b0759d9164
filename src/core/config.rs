//! Configuration module for `CourseAdvisor`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path values
pub const DIR_VARIABLE: &str = "$COURSE_ADVISOR";

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Course catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path of the catalog CSV file
    #[serde(default)]
    pub path: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog CSV path
    pub catalog_path: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

/// Keys accepted by `config get`, `config set`, and `config unset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigKey {
    Level,
    File,
    Verbose,
    Catalog,
    ReportsDir,
}

impl std::str::FromStr for ConfigKey {
    type Err = String;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "level" => Ok(Self::Level),
            "file" => Ok(Self::File),
            "verbose" => Ok(Self::Verbose),
            "catalog" | "catalog_path" | "catalog-path" => Ok(Self::Catalog),
            "reports_dir" | "reports-dir" => Ok(Self::ReportsDir),
            _ => Err(format!("Unknown config key: '{key}'")),
        }
    }
}

impl Config {
    /// Get the `$COURSE_ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/course-advisor`
    /// - macOS: `~/Library/Application Support/course-advisor`
    /// - Windows: `%APPDATA%\course-advisor`
    #[must_use]
    pub fn get_advisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("course-advisor")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled in, so
    /// upgrades pick up new settings without clobbering user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (value, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.catalog.path, &defaults.catalog.path),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ] {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not touched.
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// config.apply_overrides(&ConfigOverrides {
    ///     catalog_path: Some("./courses.csv".to_string()),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(path) = &overrides.catalog_path {
            self.catalog.path.clone_from(path);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_advisor_dir`](Self::get_advisor_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_advisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$COURSE_ADVISOR` with the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let advisor_dir = Self::get_advisor_dir();
            value.replace(DIR_VARIABLE, advisor_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$COURSE_ADVISOR` in path values. Missing fields use their serde
    /// defaults (empty strings or false).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.catalog.path = Self::expand_variables(&config.catalog.path);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`. Falls back to an empty config if the embedded
    /// defaults fail to parse.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_default()
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults, save if changed
    /// - On first run: create the config directory and write the defaults
    ///
    /// Any read or parse failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// The saved file uses the format:
    /// ```toml
    /// [logging]
    /// level = "info"
    /// file = ""
    /// verbose = false
    ///
    /// [catalog]
    /// path = "$COURSE_ADVISOR/catalog/courses.csv"
    ///
    /// [paths]
    /// reports_dir = "$COURSE_ADVISOR/reports"
    /// ```
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `reports_dir`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key.parse::<ConfigKey>().ok()? {
            ConfigKey::Verbose => return Some(self.logging.verbose.to_string()),
            text_key => self.text_field(text_key)?,
        };
        Some(value.clone())
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized, or `verbose` is not a boolean
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Verbose => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            text_key => {
                if let Some(field) = self.text_field_mut(text_key) {
                    *field = value.to_string();
                }
            }
        }
        Ok(())
    }

    /// Reset a single configuration value to its value in `defaults`
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Verbose => self.logging.verbose = defaults.logging.verbose,
            text_key => {
                if let (Some(field), Some(default)) =
                    (self.text_field_mut(text_key), defaults.text_field(text_key))
                {
                    field.clone_from(default);
                }
            }
        }
        Ok(())
    }

    const fn text_field(&self, key: ConfigKey) -> Option<&String> {
        match key {
            ConfigKey::Level => Some(&self.logging.level),
            ConfigKey::File => Some(&self.logging.file),
            ConfigKey::Catalog => Some(&self.catalog.path),
            ConfigKey::ReportsDir => Some(&self.paths.reports_dir),
            ConfigKey::Verbose => None,
        }
    }

    fn text_field_mut(&mut self, key: ConfigKey) -> Option<&mut String> {
        match key {
            ConfigKey::Level => Some(&mut self.logging.level),
            ConfigKey::File => Some(&mut self.logging.file),
            ConfigKey::Catalog => Some(&mut self.catalog.path),
            ConfigKey::ReportsDir => Some(&mut self.paths.reports_dir),
            ConfigKey::Verbose => None,
        }
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file; the next [`load()`](Config::load) recreates it.
    /// Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[catalog]")?;
        writeln!(f, "  path = \"{}\"", self.catalog.path)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
