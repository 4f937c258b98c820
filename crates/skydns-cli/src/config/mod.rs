//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Control-plane base URL, e.g. `http://10.0.0.1:8080`.
    pub url: Option<String>,

    /// Shared secret sent as the `Authorization` header.
    pub secret: Option<String>,

    /// Directory domain.
    pub domain: Option<String>,

    /// DNS port of the directory (0 or unset = 53).
    pub dns_port: Option<u16>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("net", "skydns", "skydnsctl")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`; a missing file is an empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "url" => self.url = Some(value.to_string()),
            "secret" => self.secret = Some(value.to_string()),
            "domain" => self.domain = Some(value.to_string()),
            "dns_port" => self.dns_port = Some(value.parse()?),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 url            - Directory base URL (http://host:port)\n  \
                 secret         - Shared secret for the Authorization header\n  \
                 domain         - Directory domain (default skydns.local)\n  \
                 dns_port       - DNS port of the directory (default 53)\n  \
                 output_format  - Default output format (pretty/json/yaml)",
                key
            ),
        }
        Ok(())
    }

    /// The secret with all but its edges hidden.
    pub fn masked_secret(&self) -> Option<String> {
        self.secret.as_ref().map(|s| {
            let chars: Vec<char> = s.chars().collect();
            if chars.len() > 8 {
                let head: String = chars[..4].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{head}...{tail}")
            } else {
                "****".to_string()
            }
        })
    }
}
