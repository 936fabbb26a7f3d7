//! Runtime settings for fetching and export.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; UAEPropertyScraper/1.0; +https://bitbash.dev)";

/// Main settings for a scraping run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fetch and extraction settings.
    pub scraper: ScraperConfig,

    /// Export settings.
    pub output: OutputConfig,
}

/// Fetch and extraction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// User-Agent header for every request.
    pub user_agent: String,

    /// Request timeout in seconds.
    pub timeout: f64,

    /// Scan `tel:` and `mailto:` links into OwnerPhones / OwnerEmails.
    pub retrieve_contact_details: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: 15.0,
            retrieve_contact_details: false,
        }
    }
}

impl ScraperConfig {
    /// Request timeout as a duration. Zero, negative, non-finite and
    /// unrepresentably large values fall back to the default.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(Duration::from_secs(15))
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when neither the CLI nor the output extension decides.
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ScrapeError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save settings to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply a runtime override for contact retrieval. `None` keeps the loaded value.
    pub fn with_contact_override(mut self, retrieve: Option<bool>) -> Self {
        if let Some(retrieve) = retrieve {
            self.scraper.retrieve_contact_details = retrieve;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scraper.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(settings.scraper.timeout(), Duration::from_secs(15));
        assert!(!settings.scraper.retrieve_contact_details);
        assert_eq!(settings.output.default_format, "json");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"scraper": {"retrieve_contact_details": true}}"#).unwrap();
        assert!(settings.scraper.retrieve_contact_details);
        assert_eq!(settings.scraper.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(settings.output.default_format, "json");
    }

    #[test]
    fn test_fractional_timeout() {
        let settings: Settings = serde_json::from_str(r#"{"scraper": {"timeout": 2.5}}"#).unwrap();
        assert_eq!(settings.scraper.timeout(), Duration::from_millis(2500));
    }

    #[test]
    fn test_out_of_range_timeout_falls_back() {
        for raw in ["1e300", "0", "-3", "0.0"] {
            let settings: Settings =
                serde_json::from_str(&format!(r#"{{"scraper": {{"timeout": {}}}}}"#, raw)).unwrap();
            assert_eq!(settings.scraper.timeout(), Duration::from_secs(15), "{}", raw);
        }

        let config = ScraperConfig {
            timeout: f64::NAN,
            ..ScraperConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_contact_override() {
        let settings = Settings::default().with_contact_override(Some(true));
        assert!(settings.scraper.retrieve_contact_details);

        let settings = settings.with_contact_override(None);
        assert!(settings.scraper.retrieve_contact_details);

        let settings = settings.with_contact_override(Some(false));
        assert!(!settings.scraper.retrieve_contact_details);
    }
}
