use std::collections::HashMap;

use crate::client::{BatteryIncludedClient, Endpoint};
use crate::config::{Config, FilterFacet};
use crate::context::PipelineContext;
use crate::data_models::{FacetCount, facet_counts};
use crate::document::scalar_to_string;
use crate::error::Result;
use crate::models::{FILTER_SOURCE, FilterDescriptor, FilterValue, FiltersInput, FiltersResult};
use crate::query::Query;

/// Fetches the facets for a search phrase and turns them into filters.
pub async fn get_filters(ctx: &PipelineContext, input: FiltersInput) -> Result<FiltersResult> {
    let client = BatteryIncludedClient::new(ctx)?;

    // Only facet counts matter, so fetch a single document.
    let mut query = Query::new();
    query
        .set_opt("q", input.search_phrase.as_deref())
        .set_opt("v", super::locale_variant(&ctx.config))
        .set("page", 1i64)
        .set("per_page", 1i64);

    let body = client.call(Endpoint::Browse, &query).await?;
    let facets: Vec<FacetCount> = facet_counts(&body)
        .into_iter()
        .enumerate()
        .filter_map(|(index, facet)| match facet {
            Ok(facet) => Some(facet),
            Err(e) => {
                ctx.log.warn(&format!(
                    "BatteryIncluded: skipping unreadable facet #{index}: {e}"
                ));
                None
            }
        })
        .collect();

    Ok(FiltersResult {
        filters: normalize_facets(&ctx.config, &facets),
    })
}

/// Maps facet counts to filter descriptors, honouring the configured
/// allow-list and labels. Facet order is preserved.
pub fn normalize_facets(config: &Config, facets: &[FacetCount]) -> Vec<FilterDescriptor> {
    let allowed: Vec<&str> = config
        .filter_facets
        .iter()
        .map(|f| f.field_name.as_str())
        .collect();
    let labels = label_map(&config.filter_facets);

    facets
        .iter()
        .filter(|facet| allowed.is_empty() || allowed.contains(&facet.field_name.as_str()))
        .map(|facet| {
            let id = facet.field_name.clone();
            let label = labels
                .get(facet.field_name.as_str())
                .map(|l| l.to_string())
                .unwrap_or_else(|| fallback_label(&facet.field_name));

            if facet.is_range() {
                let stats = facet.stats.unwrap_or_default();
                return FilterDescriptor::Range {
                    id,
                    label,
                    source: FILTER_SOURCE.to_string(),
                    minimum: (stats.min.unwrap_or(0.0) * 100.0).floor() as i64,
                    maximum: (stats.max.unwrap_or(0.0) * 100.0).ceil() as i64,
                };
            }

            let values = facet
                .counts
                .iter()
                .filter(|c| c.count > 0)
                .filter_map(|c| {
                    let value = scalar_to_string(&c.value)?;
                    Some(FilterValue {
                        label: format!("{value} ({})", c.count),
                        id: value,
                        hits: c.count,
                    })
                })
                .collect();

            FilterDescriptor::Multiselect {
                id,
                label,
                source: FILTER_SOURCE.to_string(),
                values,
            }
        })
        .collect()
}

/// Trimmed, non-blank configured labels keyed by field name.
fn label_map(facets: &[FilterFacet]) -> HashMap<&str, &str> {
    facets
        .iter()
        .filter_map(|f| {
            let label = f.label.as_deref()?.trim();
            (!label.is_empty()).then_some((f.field_name.as_str(), label))
        })
        .collect()
}

/// Last dot segment of a field name, e.g. `_product.color` -> `color`.
fn fallback_label(field_name: &str) -> String {
    match field_name.rsplit('.').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => field_name.to_string(),
    }
}
