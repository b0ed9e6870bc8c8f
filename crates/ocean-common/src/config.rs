//! Run configuration for the ocean model.
//!
//! A configuration file is a YAML document made of sections, each a flat
//! mapping of keys to scalars:
//!
//! ```yaml
//! grid:
//!   nx: 100
//!   ny: 200
//!   layers: 2
//!   dx: 2.0e4
//!   dy: 2.0e4
//!   fUfile: ":beta_plane_f_u:1.0e-5,2.0e-11"
//! numerics:
//!   nTimeSteps: 1000
//!   dt: 600.0
//! logging:
//!   level: ${LOG_LEVEL:-info}
//!   format: pretty
//! ```
//!
//! `${VAR}` and `${VAR:-default}` are substituted from the environment
//! before parsing. The loaded configuration is read-only.

use crate::error::{OceanError, OceanResult};
use crate::grid::Grid;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

type Section = BTreeMap<String, Value>;

/// Sectioned key/value configuration with typed getters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelConfig {
    sections: BTreeMap<String, Section>,
}

/// Time stepping parameters read from the `numerics` section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    pub n_time_steps: usize,
    pub dt: f64,
}

/// Log output settings read from the optional `logging` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 2] = ["json", "pretty"];

impl ModelConfig {
    /// Load a configuration file, expanding environment variables.
    pub fn load<P: AsRef<Path>>(path: P) -> OceanResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            OceanError::ConfigParse(format!(
                "failed to read config from {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;
        let config = Self::from_yaml_str(&content)?;
        debug!(path = ?path.as_ref(), sections = config.sections.len(), "Loaded model configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text, expanding environment variables.
    pub fn from_yaml_str(content: &str) -> OceanResult<Self> {
        let expanded = expand_env_vars(content)?;
        let raw: BTreeMap<String, Option<Section>> = serde_yaml::from_str(&expanded)?;
        let sections = raw
            .into_iter()
            .map(|(name, section)| (name, section.unwrap_or_default()))
            .collect();

        let config = Self { sections };
        config.logging()?;
        Ok(config)
    }

    /// Return a copy of this configuration with one entry set.
    pub fn with_value(
        mut self,
        section: &str,
        key: &str,
        value: impl Into<Value>,
    ) -> Self {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }

    /// Whether `section.key` is present.
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.raw(section, key).is_some()
    }

    /// Names of all sections.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    fn raw(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .filter(|v| !v.is_null())
    }

    fn require(&self, section: &str, key: &str) -> OceanResult<&Value> {
        self.raw(section, key).ok_or_else(|| OceanError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Read a non-negative integer.
    pub fn get_usize(&self, section: &str, key: &str) -> OceanResult<usize> {
        let value = self.require(section, key)?;
        let parsed = match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                OceanError::invalid_value(
                    section,
                    key,
                    format!("expected a non-negative integer, got {}", describe(value)),
                )
            })
    }

    /// Read a real number. Integers are accepted.
    pub fn get_f64(&self, section: &str, key: &str) -> OceanResult<f64> {
        let value = self.require(section, key)?;
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| {
            OceanError::invalid_value(
                section,
                key,
                format!("expected a real number, got {}", describe(value)),
            )
        })
    }

    /// Read a text value. Numbers and booleans are rendered as text.
    pub fn get_str(&self, section: &str, key: &str) -> OceanResult<String> {
        let value = self.require(section, key)?;
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(OceanError::invalid_value(
                section,
                key,
                format!("expected a scalar, got {}", describe(other)),
            )),
        }
    }

    /// Read an optional real number.
    pub fn get_f64_or(&self, section: &str, key: &str, default: f64) -> OceanResult<f64> {
        if self.contains(section, key) {
            self.get_f64(section, key)
        } else {
            Ok(default)
        }
    }

    /// Build the run's grid from the `grid` section.
    pub fn grid(&self) -> OceanResult<Grid> {
        Grid::with_origin(
            self.get_usize("grid", "nx")?,
            self.get_usize("grid", "ny")?,
            self.get_usize("grid", "layers")?,
            self.get_f64("grid", "dx")?,
            self.get_f64("grid", "dy")?,
            self.get_f64_or("grid", "x0", 0.0)?,
            self.get_f64_or("grid", "y0", 0.0)?,
        )
    }

    /// Time stepping parameters, when both are configured.
    pub fn time_axis(&self) -> OceanResult<Option<TimeAxis>> {
        if !self.contains("numerics", "nTimeSteps") || !self.contains("numerics", "dt") {
            return Ok(None);
        }
        Ok(Some(TimeAxis {
            n_time_steps: self.get_usize("numerics", "nTimeSteps")?,
            dt: self.get_f64("numerics", "dt")?,
        }))
    }

    /// Logging settings, defaulting to `info`/`pretty`.
    pub fn logging(&self) -> OceanResult<LoggingConfig> {
        let mut logging = LoggingConfig::default();
        if self.contains("logging", "level") {
            logging.level = self.get_str("logging", "level")?.to_lowercase();
        }
        if self.contains("logging", "format") {
            logging.format = self.get_str("logging", "format")?.to_lowercase();
        }

        if !VALID_LEVELS.contains(&logging.level.as_str()) {
            return Err(OceanError::invalid_value(
                "logging",
                "level",
                format!(
                    "invalid log level: {}. Must be one of: {:?}",
                    logging.level, VALID_LEVELS
                ),
            ));
        }
        if !VALID_FORMATS.contains(&logging.format.as_str()) {
            return Err(OceanError::invalid_value(
                "logging",
                "format",
                format!(
                    "invalid log format: {}. Must be one of: {:?}",
                    logging.format, VALID_FORMATS
                ),
            ));
        }
        Ok(logging)
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("'{}'", s),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(_) => "a tagged value".to_string(),
    }
}

/// Substitute `${VAR}` and `${VAR:-default}` references.
///
/// A variable that is unset or empty takes its default; one with no default
/// must be set.
fn expand_env_vars(content: &str) -> OceanResult<String> {
    let mut expanded = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        let reference = &rest[start + 2..];
        let end = reference.find('}').ok_or_else(|| {
            OceanError::ConfigParse(format!(
                "unclosed variable substitution at '${{{}'",
                reference.lines().next().unwrap_or_default()
            ))
        })?;
        expanded.push_str(&env_value(&reference[..end])?);
        rest = &reference[end + 1..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

fn env_value(reference: &str) -> OceanResult<String> {
    let (name, default) = match reference.split_once(":-") {
        Some((name, default)) => (name.trim(), Some(default)),
        None => (reference.trim(), None),
    };

    match (std::env::var(name), default) {
        (Ok(value), _) if !value.is_empty() => Ok(value),
        (_, Some(default)) => Ok(default.to_string()),
        (Ok(value), None) => Ok(value),
        (Err(_), None) => Err(OceanError::ConfigParse(format!(
            "environment variable {} not set",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "
grid:
  nx: 10
  ny: 8
  layers: 2
  dx: 1000
  dy: 2.5e3
numerics:
  nTimeSteps: 50
  dt: 60.0
sponge:
";

    #[test]
    fn test_typed_getters() {
        let config = ModelConfig::from_yaml_str(BASIC).unwrap();
        assert_eq!(config.get_usize("grid", "nx").unwrap(), 10);
        assert_eq!(config.get_f64("grid", "dx").unwrap(), 1000.0);
        assert_eq!(config.get_f64("grid", "dy").unwrap(), 2500.0);
        assert_eq!(config.get_str("grid", "layers").unwrap(), "2");
        assert!(config.sections().any(|s| s == "sponge"));
        assert!(!config.contains("sponge", "spongeHFile"));
    }

    #[test]
    fn test_grid_and_time_axis() {
        let config = ModelConfig::from_yaml_str(BASIC).unwrap();
        let grid = config.grid().unwrap();
        assert_eq!((grid.nx(), grid.ny(), grid.layers()), (10, 8, 2));
        assert_eq!(grid.origin(), (0.0, 0.0));

        let axis = config.time_axis().unwrap().unwrap();
        assert_eq!(axis.n_time_steps, 50);
        assert_eq!(axis.dt, 60.0);
    }

    #[test]
    fn test_missing_and_invalid_values() {
        let config = ModelConfig::from_yaml_str(BASIC).unwrap();
        assert!(matches!(
            config.get_usize("grid", "nz"),
            Err(OceanError::MissingKey { ref section, ref key }) if section == "grid" && key == "nz"
        ));

        let config = config.with_value("grid", "nx", "ten");
        assert!(matches!(
            config.get_usize("grid", "nx"),
            Err(OceanError::InvalidValue { .. })
        ));
        assert!(config.grid().is_err());
    }

    #[test]
    fn test_env_expansion() {
        std::env::set_var("OCEAN_TEST_NX", "42");
        let yaml = "grid:\n  nx: ${OCEAN_TEST_NX}\n  ny: ${OCEAN_TEST_UNSET_NY:-7}\n";
        let config = ModelConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.get_usize("grid", "nx").unwrap(), 42);
        assert_eq!(config.get_usize("grid", "ny").unwrap(), 7);

        assert!(ModelConfig::from_yaml_str("grid:\n  nx: ${OCEAN_TEST_NEVER_SET}\n").is_err());
        assert!(ModelConfig::from_yaml_str("grid:\n  nx: ${UNCLOSED\n").is_err());

        std::env::set_var("OCEAN_TEST_EMPTY", "");
        assert_eq!(
            expand_env_vars("a${OCEAN_TEST_NX}b ${OCEAN_TEST_EMPTY:-info} $HOME").unwrap(),
            "a42b info $HOME"
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.yaml");
        fs::write(&path, BASIC).unwrap();
        let config = ModelConfig::load(&path).unwrap();
        assert_eq!(config.get_usize("numerics", "nTimeSteps").unwrap(), 50);

        assert!(matches!(
            ModelConfig::load(dir.path().join("absent.yaml")),
            Err(OceanError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_logging_validation() {
        let config = ModelConfig::from_yaml_str("logging:\n  level: DEBUG\n  format: json\n").unwrap();
        let logging = config.logging().unwrap();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, "json");

        assert!(ModelConfig::from_yaml_str("logging:\n  level: loud\n").is_err());
        assert!(ModelConfig::from_yaml_str("logging:\n  format: xml\n").is_err());
        assert_eq!(ModelConfig::default().logging().unwrap(), LoggingConfig::default());
    }
}
