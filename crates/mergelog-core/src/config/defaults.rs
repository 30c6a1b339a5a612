//! Default configuration values

use super::types::Transformer;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "mergelog.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "mergelog.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".mergelog.yaml";

/// Placeholder in `template` replaced by the categorized section
pub const CHANGELOG_PLACEHOLDER: &str = "${{CHANGELOG}}";

/// Placeholder in `template` replaced by the uncategorized section
pub const UNCATEGORIZED_PLACEHOLDER: &str = "${{UNCATEGORIZED}}";

/// Default per pull request template
pub const DEFAULT_PR_TEMPLATE: &str = "- ${{TITLE}}\n   - PR: #${{NUMBER}}";

/// Default outer document template
pub const DEFAULT_TEMPLATE: &str =
    "${{CHANGELOG}}\n\n<details>\n<summary>Uncategorized</summary>\n\n${{UNCATEGORIZED}}\n</details>";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".mergelog.toml",
        "mergelog.json",
    ]
}

/// Transformers used when none are configured
pub fn default_transformers() -> Vec<Transformer> {
    Vec::new()
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r###"# mergelog configuration

# ASC lists the oldest merge first, anything else the newest
sort: DESC

pr_template: "- ${{TITLE}}\n   - PR: #${{NUMBER}}"

template: "${{CHANGELOG}}\n\n<details>\n<summary>Uncategorized</summary>\n\n${{UNCATEGORIZED}}\n</details>"

categories:
  - title: "## 🚀 Features"
    labels: ["feature"]
  - title: "## 🐛 Fixes"
    labels: ["fix", "bug"]

ignore_labels: ["ignore"]

transformers:
  - pattern: "\\[(SKIP|CI)\\] "
    target: ""
"###;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_template_parses() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.transformers.len(), 1);
        assert_eq!(config.pr_template, DEFAULT_PR_TEMPLATE);
        assert_eq!(config.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_default_template_has_placeholders() {
        assert!(DEFAULT_TEMPLATE.contains(CHANGELOG_PLACEHOLDER));
        assert!(DEFAULT_TEMPLATE.contains(UNCATEGORIZED_PLACEHOLDER));
    }
}
