//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use hub_data::CatalogClient;

use crate::config::{HubConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: HubConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file, applying the API URL override.
    pub fn load(config_path: Option<&str>, api_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            (HubConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (HubConfig::default(), None),
            }
        };

        if let Some(url) = api_url {
            config.api.base_url = url.to_string();
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build a catalog client from the API settings.
    pub fn catalog(&self) -> Result<CatalogClient> {
        CatalogClient::new(&self.config.api.base_url, self.config.api.timeout())
            .context("Failed to create HTTP client")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(PathBuf, HubConfig)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = HubConfig::load(config_path.to_str()?) {
                    return Some((config_path, config));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("producthub-ctx-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.join("producthub.toml"),
            "[api]\nbase_url = \"http://localhost:1/products\"\n",
        )
        .unwrap();

        let found = find_config(&nested);
        std::fs::remove_dir_all(&root).unwrap();

        let (path, config) = found.unwrap();
        assert!(path.ends_with("producthub.toml"));
        assert_eq!(config.api.base_url, "http://localhost:1/products");
    }
}
