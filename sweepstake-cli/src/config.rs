/// Config file loading and creation for the sweepstake CLI.
///
/// Config lives at ~/.config/sweepstake/config.toml.
/// All fields are optional — CLI args override config values, and the
/// built-in roster/denylist apply when neither specifies one.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

/// The fixed participant roster used when no config or flag overrides it.
/// Sorted case-insensitively before assignment; the sort order, not this
/// order, decides who gets which positional pick.
pub const DEFAULT_ROSTER: [&str; 10] = [
    "Will", "Alex", "Coops", "Emily", "Charlotte", "GC", "Roz", "Iain", "Ted", "Matty",
];

/// Family names dropped from the standings before tiering.
pub const DEFAULT_EXCLUDED: [&str; 1] = ["Doohan"];

#[derive(Deserialize, Default)]
pub struct SweepstakeConfig {
    pub base_url: Option<String>,
    pub roster: Option<Vec<String>>,
    pub excluded: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<usize>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# sweepstake configuration
# All values here can be overridden by CLI flags.

# Jolpica/Ergast base URL for the current season
# base_url = \"https://api.jolpi.ca/ergast/f1/current\"

# Participants. Assignment order follows the case-insensitive sort of
# these names, not the order written here.
# roster = [\"Will\", \"Alex\", \"Coops\", \"Emily\", \"Charlotte\", \"GC\", \"Roz\", \"Iain\", \"Ted\", \"Matty\"]

# Family names to drop from the standings before tiering
# excluded = [\"Doohan\"]

# HTTP request timeout in seconds
# timeout_secs = 10

# Retries per fetch on network failures
# retries = 3
";

/// Returns the default config path: ~/.config/sweepstake/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("sweepstake").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> SweepstakeConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => SweepstakeConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg: SweepstakeConfig = toml::from_str(
            r#"
            base_url = "http://localhost:8080/f1/current"
            roster = ["Ann", "Bob"]
            excluded = ["Doohan", "Colapinto"]
            timeout_secs = 5
            retries = 1
            "#,
        )
        .unwrap();
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:8080/f1/current"));
        assert_eq!(cfg.roster.unwrap(), vec!["Ann", "Bob"]);
        assert_eq!(cfg.excluded.unwrap().len(), 2);
        assert_eq!(cfg.timeout_secs, Some(5));
        assert_eq!(cfg.retries, Some(1));
    }

    #[test]
    fn test_empty_config_is_all_none() {
        let cfg: SweepstakeConfig = toml::from_str("").unwrap();
        assert!(cfg.base_url.is_none());
        assert!(cfg.roster.is_none());
        assert!(cfg.excluded.is_none());
    }

    #[test]
    fn test_default_template_parses_once_uncommented() {
        // The commented template must stay valid TOML when uncommented.
        let uncommented: String = DEFAULT_CONFIG_TEMPLATE
            .lines()
            .filter_map(|l| l.strip_prefix("# "))
            .filter(|l| l.contains('='))
            .collect::<Vec<_>>()
            .join("\n");
        let cfg: SweepstakeConfig = toml::from_str(&uncommented).unwrap();
        assert_eq!(cfg.roster.unwrap().len(), DEFAULT_ROSTER.len());
        assert_eq!(cfg.excluded.unwrap(), DEFAULT_EXCLUDED);
    }
}
