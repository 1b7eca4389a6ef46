use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Required fields exist (enforced by serde)
/// - Source and destination folders are not empty
/// - At least one mail recipient is configured
/// - Present filters and the destination name are not empty strings
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.source_folder.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "source_folder cannot be empty".to_string(),
        ));
    }

    if config.destination_folder.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "destination_folder cannot be empty".to_string(),
        ));
    }

    if config.mail.to.is_empty() {
        return Err(ConfigError::ValidationError(
            "mail.to must contain at least one recipient".to_string(),
        ));
    }

    if config.mail.to.iter().any(|r| r.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "mail.to must not contain empty recipients".to_string(),
        ));
    }

    if matches!(&config.file_extension, Some(ext) if ext.trim().is_empty() || ext.trim() == ".") {
        return Err(ConfigError::ValidationError(
            "file_extension must not be empty when set".to_string(),
        ));
    }

    if matches!(&config.file_name_starts_with, Some(p) if p.is_empty()) {
        return Err(ConfigError::ValidationError(
            "file_name_starts_with must not be empty when set".to_string(),
        ));
    }

    if matches!(&config.destination_file_name, Some(n) if n.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "destination_file_name must not be empty when set".to_string(),
        ));
    }

    Ok(())
}
