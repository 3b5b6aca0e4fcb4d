//! Response shapes of the BatteryIncluded documents API.
//!
//! Browse bodies are read entry by entry: a malformed hit or facet only
//! costs that entry, never the rest of the response.

use serde::Deserialize;
use serde_json::Value;

use crate::document::lenient_vec;

/// The parts of a `/browse` body the search step uses.
#[derive(Debug, Clone, Default)]
pub struct BrowseResponse {
    /// Total number of matching documents.
    pub found: u64,
    pub hits: Vec<BrowseHit>,
}

impl BrowseResponse {
    pub fn from_value(body: &Value) -> Self {
        let found = body.get("found").and_then(count_value).unwrap_or(0);
        let hits = body
            .get("hits")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(BrowseHit::from_value).collect())
            .unwrap_or_default();
        Self { found, hits }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrowseHit {
    pub document: Value,
}

impl BrowseHit {
    /// A hit that is not an object, or has no document, gets a `null` one.
    pub fn from_value(hit: &Value) -> Self {
        Self {
            document: hit.get("document").cloned().unwrap_or(Value::Null),
        }
    }
}

/// Parses each `facet_counts` entry of a `/browse` body on its own.
///
/// A missing or non-array `facet_counts` yields no entries.
pub fn facet_counts(body: &Value) -> Vec<serde_json::Result<FacetCount>> {
    body.get("facet_counts")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| FacetCount::deserialize(item))
                .collect()
        })
        .unwrap_or_default()
}

fn count_value(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f > 0.0)
            .map(|f| f as u64)
    })
}

#[derive(Deserialize, Debug, Clone)]
pub struct FacetCount {
    pub field_name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub stats: Option<FacetStats>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub counts: Vec<FacetValueCount>,
}

impl FacetCount {
    pub fn is_range(&self) -> bool {
        self.kind.as_deref() == Some("range")
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
#[serde(default)]
pub struct FacetStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FacetValueCount {
    pub value: Value,
    pub count: u64,
}

/// One group of suggestions from `/suggest`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SuggestItem {
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub hits: Vec<SuggestHit>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SuggestHit {
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn browse_response_tolerates_nulls_and_missing_fields() {
        let res = BrowseResponse::from_value(&json!({
            "found": null,
            "hits": [{"document": {"id": 1}}, {}]
        }));
        assert_eq!(res.found, 0);
        assert_eq!(res.hits.len(), 2);
        assert!(res.hits[1].document.is_null());
    }

    #[test]
    fn non_object_hits_get_null_documents() {
        let res = BrowseResponse::from_value(&json!({
            "found": 3,
            "hits": [null, "x", {"document": {"sku": "A"}}]
        }));
        assert_eq!(res.found, 3);
        assert!(res.hits[0].document.is_null());
        assert!(res.hits[1].document.is_null());
        assert_eq!(res.hits[2].document, json!({"sku": "A"}));
    }

    #[test]
    fn unexpected_shapes_read_as_empty() {
        let res = BrowseResponse::from_value(&json!({"hits": "nope", "found": "many"}));
        assert!(res.hits.is_empty());
        assert_eq!(res.found, 0);
        assert!(BrowseResponse::from_value(&Value::Null).hits.is_empty());
        assert!(facet_counts(&json!({"facet_counts": "oops"})).is_empty());
    }

    #[test]
    fn fractional_found_is_truncated() {
        assert_eq!(BrowseResponse::from_value(&json!({"found": 12.0})).found, 12);
    }

    #[test]
    fn facets_parse_independently() {
        let facets = facet_counts(&json!({
            "facet_counts": [
                {"field_name": "_product.color", "counts": [
                    {"value": "red", "count": 2},
                    {"value": "blue", "count": "3"}
                ]},
                {"field_name": null},
                {"field_name": "price", "type": "range", "stats": {"min": "1"}},
                {"field_name": "size", "counts": null}
            ]
        }));
        assert_eq!(facets.len(), 4);
        let color = facets[0].as_ref().unwrap();
        assert_eq!(color.counts.len(), 1);
        assert!(!color.is_range());
        assert!(facets[1].is_err());
        assert!(facets[2].is_err());
        assert!(facets[3].as_ref().unwrap().counts.is_empty());
    }
}
