//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::defaults::{CHANGELOG_PLACEHOLDER, UNCATEGORIZED_PLACEHOLDER};
use super::types::Config;

/// Validate configuration
///
/// Sort tokens and transformer patterns are never rejected here: the former
/// fall back to descending order, the latter are dropped when compiled.
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_templates(config)?;
    validate_categories(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_templates(config: &Config) -> Result<()> {
    if config.pr_template.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "pr_template".to_string(),
            message: "template cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_categories(config: &Config) -> Result<()> {
    if !config.categories.is_empty() {
        debug!(count = config.categories.len(), "validating categories");
    }
    for (i, category) in config.categories.iter().enumerate() {
        if category.title.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("categories[{}].title", i),
                message: "category title cannot be empty".to_string(),
            }
            .into());
        }

        if category.labels.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("categories[{}].labels", i),
                message: "category needs at least one label".to_string(),
            }
            .into());
        }

        if category.labels.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: format!("categories[{}].labels", i),
                message: "labels cannot be empty strings".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Non-fatal observations about a configuration
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if !config.template.contains(CHANGELOG_PLACEHOLDER) {
        warnings.push(format!(
            "template does not contain {}; categorized entries will not be shown",
            CHANGELOG_PLACEHOLDER
        ));
    }
    if !config.template.contains(UNCATEGORIZED_PLACEHOLDER) {
        warnings.push(format!(
            "template does not contain {}; uncategorized entries will not be shown",
            UNCATEGORIZED_PLACEHOLDER
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Category;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
        assert!(config_warnings(&config).is_empty());
    }

    #[test]
    fn test_validate_empty_pr_template() {
        let mut config = Config::default();
        config.pr_template = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_category_without_labels() {
        let mut config = Config::default();
        config.categories.push(Category::new("Bugs", Vec::<String>::new()));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_category_without_title() {
        let mut config = Config::default();
        config.categories.push(Category::new("", ["bug"]));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_overlapping_categories_are_valid() {
        let mut config = Config::default();
        config.categories.push(Category::new("Bugs", ["bug"]));
        config.categories.push(Category::new("Everything", ["bug", "feature"]));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_template_without_placeholders_warns() {
        let mut config = Config::default();
        config.template = "static".to_string();
        assert_eq!(config_warnings(&config).len(), 2);
    }
}
