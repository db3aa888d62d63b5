use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Harness configuration, read from `bankcert.toml` when present.
///
/// `aliases` maps a bank identifier to extra spellings tried during
/// resolution, after the built-in ones. Built-in aliases cannot be
/// removed, only extended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub aliases: HashMap<String, Vec<String>>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            aliases: HashMap::new(),
        }
    }
}

/// Load configuration from `path`, or from `./bankcert.toml` if none is
/// given. A missing default file yields the defaults; an explicitly
/// named file must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from("bankcert.toml"), false),
    };

    if !path.exists() {
        if required {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_default_config_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_parse_aliases_section() {
        let raw = r#"
data_dir = "fixtures"

[aliases]
icici = ["icic"]
"#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
        assert_eq!(config.aliases["icici"], vec!["icic".to_string()]);
    }
}
