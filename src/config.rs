use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AdapterError, Result};

/// A facet the filter UI may show, with an optional display label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterFacet {
    pub field_name: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Extension configuration handed to every step by the pipeline.
///
/// Every field defaults so that a missing value surfaces through
/// [`Config::validate`] with a readable message rather than as a
/// deserialization error.
#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub public_api_key: String,
    pub base_url: String,
    pub collection: String,
    /// Dot-notation path to the product id inside a result document.
    pub product_identifier: String,
    pub locale: Option<String>,
    pub filter_facets: Vec<FilterFacet>,
    pub catalog_service: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("public_api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("collection", &self.collection)
            .field("product_identifier", &self.product_identifier)
            .field("locale", &self.locale)
            .field("filter_facets", &self.filter_facets)
            .field("catalog_service", &self.catalog_service)
            .finish()
    }
}

impl Config {
    /// Checks the fields the API client cannot work without.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("publicApiKey", &self.public_api_key),
            ("baseUrl", &self.base_url),
            ("collection", &self.collection),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AdapterError::Configuration(format!("{name} is required")));
            }
        }
        Ok(())
    }

    /// Loads configuration from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let filter_facets = match env::var("BI_FILTER_FACETS") {
            Ok(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw).map_err(|e| {
                AdapterError::Configuration(format!("BI_FILTER_FACETS is not valid JSON: {e}"))
            })?,
            _ => Vec::new(),
        };
        let config = Config {
            public_api_key: get_env_opt("BI_PUBLIC_API_KEY").unwrap_or_default(),
            base_url: get_env_opt("BI_BASE_URL").unwrap_or_default(),
            collection: get_env_opt("BI_COLLECTION").unwrap_or_default(),
            product_identifier: get_env_opt("BI_PRODUCT_IDENTIFIER").unwrap_or_else(|| "id".into()),
            locale: get_env_opt("BI_LOCALE"),
            filter_facets,
            catalog_service: get_env_opt("BI_CATALOG_SERVICE"),
        };
        config.validate()?;
        Ok(config)
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
