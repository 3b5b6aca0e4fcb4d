//! Translation of pipeline sort keys and filters into BatteryIncluded
//! query parameters. Nothing here fails; unusable input is dropped.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::document::scalar_to_string;
use crate::query::Query;

/// Filters with this source are resolved by the pipeline itself.
const CATEGORIES_SOURCE: &str = "categories";

/// A well-formed pipeline filter entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputFilter {
    Range {
        minimum: f64,
        maximum: f64,
        #[serde(default)]
        source: Option<String>,
    },
    Multiselect {
        #[serde(default)]
        values: Vec<Value>,
        #[serde(default)]
        source: Option<String>,
    },
}

impl InputFilter {
    /// Parses a raw entry, returning `None` if it is malformed.
    pub fn from_value(value: &Value) -> Option<Self> {
        InputFilter::deserialize(value).ok()
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            InputFilter::Range { source, .. } | InputFilter::Multiselect { source, .. } => {
                source.as_deref()
            }
        }
    }
}

/// Maps a pipeline sort key to a BatteryIncluded sort expression.
pub fn prepare_sort(sort: Option<&str>) -> Option<&'static str> {
    match sort? {
        "priceAsc" => Some("_product.price:asc"),
        "priceDesc" => Some("_product.price:desc"),
        "nameAsc" => Some("_product_i18n.name:asc"),
        "nameDesc" => Some("_product_i18n.name:desc"),
        _ => None,
    }
}

/// Builds `f[field][...]` parameters from raw pipeline filter entries.
pub fn prepare_filters(filters: &BTreeMap<String, Value>) -> Query {
    let mut query = Query::new();
    for (field, raw) in filters {
        let Some(filter) = InputFilter::from_value(raw) else {
            continue;
        };
        if filter.source() == Some(CATEGORIES_SOURCE) {
            continue;
        }
        match filter {
            InputFilter::Range {
                minimum, maximum, ..
            } => {
                query.set(format!("f[{field}][from]"), round2(from_minor_units(minimum)));
                query.set(format!("f[{field}][till]"), round2(from_minor_units(maximum)));
            }
            InputFilter::Multiselect { values, .. } => {
                let values: Vec<String> = values
                    .iter()
                    .filter_map(scalar_to_string)
                    .filter(|v| !v.is_empty())
                    .collect();
                if !values.is_empty() {
                    query.set(format!("f[{field}][]"), values);
                }
            }
        }
    }
    query
}

/// Values of 100 and above are taken to be cents.
fn from_minor_units(value: f64) -> f64 {
    if value >= 100.0 { value / 100.0 } else { value }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
