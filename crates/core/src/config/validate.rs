use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Download, movie and series roots are non-empty and pairwise distinct
/// - Series indicators are non-empty and every series pattern compiles
/// - Placer buffer size is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let roots = [
        ("paths.downloads_root", &config.paths.downloads_root),
        ("paths.movies_root", &config.paths.movies_root),
        ("paths.series_root", &config.paths.series_root),
    ];

    for (name, value) in &roots {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                name
            )));
        }
    }

    for (i, (name_a, a)) in roots.iter().enumerate() {
        for (name_b, b) in &roots[i + 1..] {
            if a == b {
                return Err(ConfigError::ValidationError(format!(
                    "{} and {} must be different (both are {:?})",
                    name_a, name_b, a
                )));
            }
        }
    }

    if config
        .classify
        .series_indicators
        .iter()
        .any(|indicator| indicator.is_empty())
    {
        return Err(ConfigError::ValidationError(
            "classify.series_indicators cannot contain empty strings".to_string(),
        ));
    }

    for pattern in &config.classify.series_patterns {
        if let Err(e) = regex_lite::Regex::new(pattern) {
            return Err(ConfigError::ValidationError(format!(
                "classify.series_patterns: invalid pattern {:?}: {}",
                pattern, e
            )));
        }
    }

    if config.placer.buffer_size == 0 {
        return Err(ConfigError::ValidationError(
            "placer.buffer_size cannot be 0".to_string(),
        ));
    }

    Ok(())
}
