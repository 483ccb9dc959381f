pub mod models;

pub use models::{Config, ConfigFile};

use crate::api::rage4::API_BASE_URL;
use anyhow::{anyhow, Context, Result};
use log::debug;
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

pub const USERNAME_ENV: &str = "RAGE4_USERNAME";
pub const API_TOKEN_ENV: &str = "RAGE4_API_TOKEN";

impl Config {
    /// Reads `path` if it exists and fills missing credentials from the
    /// process environment.
    pub fn load(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            Some(load_file(path)?)
        } else {
            debug!("Config file {} not found, using environment", path.display());
            None
        };

        Self::resolve(file.unwrap_or_default(), |key| std::env::var(key).ok())
    }

    pub fn resolve<F>(file: ConfigFile, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let section = file.rage4;
        let username = section
            .username
            .or_else(|| env(USERNAME_ENV))
            .ok_or_else(|| anyhow!("Missing username: set rage4.username or {}", USERNAME_ENV))?;
        let api_token = section
            .api_token
            .or_else(|| env(API_TOKEN_ENV))
            .ok_or_else(|| anyhow!("Missing API token: set rage4.api_token or {}", API_TOKEN_ENV))?;

        let config = Config {
            username,
            api_token,
            base_url: section.base_url.unwrap_or_else(|| API_BASE_URL.to_string()),
        };
        config.validate().context("Invalid configuration")?;

        Ok(config)
    }
}

fn load_file(path: &Path) -> Result<ConfigFile> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
