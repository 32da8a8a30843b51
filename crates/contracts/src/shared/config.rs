//! Application settings.
//!
//! Every field has a default matching the shipped behaviour, so an empty JSON
//! object (or no config at all) yields a working app.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOAD_DELAY_MS: u32 = 1000;
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/200";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RentalConfig {
    /// Brand shown as `<first><span>second</span>` in header and footer
    pub brand_first: String,
    pub brand_second: String,
    /// Simulated catalog fetch latency
    pub catalog_load_delay_ms: u32,
    pub placeholder_image_url: String,
    /// Larger placeholder used by the About section
    pub about_image_url: String,
    pub currency_symbol: String,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            brand_first: "Speedy".to_string(),
            brand_second: "Rentals".to_string(),
            catalog_load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            about_image_url: "/api/placeholder/400/300".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl RentalConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str(raw)?;
        Ok(config)
    }

    pub fn brand(&self) -> String {
        format!("{}{}", self.brand_first, self.brand_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = RentalConfig::from_json("{}").unwrap();
        assert_eq!(config, RentalConfig::default());
        assert_eq!(config.catalog_load_delay_ms, 1000);
        assert_eq!(config.brand(), "SpeedyRentals");
    }

    #[test]
    fn test_partial_override() {
        let config =
            RentalConfig::from_json(r#"{"catalogLoadDelayMs": 250, "currencySymbol": "€"}"#)
                .unwrap();
        assert_eq!(config.catalog_load_delay_ms, 250);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.placeholder_image_url, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_invalid_json() {
        assert!(RentalConfig::from_json("{not json").is_err());
    }
}
