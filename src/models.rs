use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::document::null_as_default;

/// Value of `source` on every filter this adapter produces.
pub const FILTER_SOURCE: &str = "BatteryIncluded";

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchInput {
    pub search_phrase: Option<String>,
    /// Raw pipeline filters keyed by field name. Malformed entries are
    /// tolerated here and dropped when the query is built.
    #[serde(deserialize_with = "null_as_default")]
    pub filters: BTreeMap<String, Value>,
    pub sort: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Identifiers as strings; numeric ids in documents arrive as e.g. `"17"`.
    pub product_ids: Vec<String>,
    pub total_product_count: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionInput {
    pub search_phrase: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionResult {
    pub suggestions: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FiltersInput {
    pub search_phrase: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FiltersResult {
    pub filters: Vec<FilterDescriptor>,
}

/// A filter the pipeline's filter UI can render.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterDescriptor {
    Range {
        id: String,
        label: String,
        source: String,
        minimum: i64,
        maximum: i64,
    },
    Multiselect {
        id: String,
        label: String,
        source: String,
        values: Vec<FilterValue>,
    },
}

impl FilterDescriptor {
    pub fn id(&self) -> &str {
        match self {
            FilterDescriptor::Range { id, .. } | FilterDescriptor::Multiselect { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterDescriptor::Range { label, .. } | FilterDescriptor::Multiselect { label, .. } => {
                label
            }
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FilterValue {
    pub id: String,
    pub label: String,
    pub hits: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogServiceResult {
    pub catalog_service: Option<String>,
}
