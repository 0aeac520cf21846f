//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development. Airtable credentials are
//! optional; without them listings are read from the JSON files under
//! `DATA_DIR/listings`.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Public site root used in canonical URLs, JSON-LD and the sitemap
    pub site_url: String,
    /// Root of the on-disk data (listing JSON, newsletter file)
    pub data_dir: PathBuf,
    /// Newsletter signup file
    pub newsletter_file: PathBuf,
    /// Airtable source, when configured
    pub airtable: Option<AirtableConfig>,
}

/// Airtable connection settings.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table_name: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:3000".to_string(),
            site_url: "https://kidfriendlyflagstaff.com".to_string(),
            data_dir: PathBuf::from("data"),
            newsletter_file: PathBuf::from("data/newsletter-signups.json"),
            airtable: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
        let newsletter_file = env::var("NEWSLETTER_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("newsletter-signups.json"));

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            site_url: env::var("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://kidfriendlyflagstaff.com".to_string()),
            data_dir,
            newsletter_file,
            airtable: AirtableConfig::from_env(),
        })
    }

    /// Directory holding the per-category listing files.
    pub fn listings_dir(&self) -> PathBuf {
        self.data_dir.join("listings")
    }
}

impl AirtableConfig {
    /// Both the API key and base id must be set and non-empty.
    fn from_env() -> Option<Self> {
        let api_key = non_empty_var("AIRTABLE_API_KEY")?;
        let base_id = non_empty_var("AIRTABLE_BASE_ID")?;
        Some(Self {
            api_key,
            base_id,
            table_name: non_empty_var("AIRTABLE_TABLE_NAME")
                .unwrap_or_else(|| "Listings".to_string()),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
