use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        // Load .env file if present (won't override existing env vars)
        let _ = dotenvy::dotenv();

        // First check environment variable
        if let Ok(base_url) = std::env::var("MARQUEE_BASE_URL") {
            let base_url = base_url.trim().trim_end_matches('/').to_string();
            if !base_url.is_empty() {
                return Ok(Self { base_url });
            }
        }

        // Then check config file
        let config_path = Self::config_file_path()?;
        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
            let config: AppConfig = serde_json::from_str(&contents)
                .with_context(|| "Failed to parse config file")?;
            return Ok(config);
        }

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("marquee");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }
}
