//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::ProjectConfig;

/// Loads and validates a `marquee.toml` configuration from a project
/// directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("marquee.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `marquee.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are usable before handing them to
/// the controller. The controller's own construction check (interval must
/// round to at least one tick) still applies downstream.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.clock.frequency.hz() == 0 {
        return Err(ConfigError::ValidationError(
            "clock.frequency must be positive".to_string(),
        ));
    }
    let interval = config.pattern.interval_seconds;
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "pattern.interval_seconds must be positive, got {interval}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[clock]
frequency = "12MHz"

[pattern]
interval_seconds = 0.5
mode = "scan"
"#;

    #[test]
    fn parse_minimal_config() {
        let config = load_config_from_str(MINIMAL).unwrap();
        assert_eq!(config.clock.frequency.hz(), 12_000_000);
        assert_eq!(config.pattern.interval_seconds, 0.5);
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_clock_table_errors() {
        let err = load_config_from_str("[pattern]\ninterval_seconds = 0.5").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn zero_frequency_rejected() {
        let toml = r#"
[clock]
frequency = 0

[pattern]
interval_seconds = 0.5
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn non_positive_interval_rejected() {
        let toml = r#"
[clock]
frequency = "4Hz"

[pattern]
interval_seconds = -2.0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("marquee.toml"), MINIMAL).unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.clock.frequency.hz(), 12_000_000);
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
