use crate::builders::{prepare_filters, prepare_sort};
use crate::client::{BatteryIncludedClient, Endpoint};
use crate::config::Config;
use crate::context::PipelineContext;
use crate::data_models::BrowseResponse;
use crate::document::{get_by_path, is_valid_path, scalar_to_string};
use crate::error::Result;
use crate::models::{SearchInput, SearchResult};
use crate::query::Query;

pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Searches products by phrase and returns their identifiers.
///
/// An invalid `productIdentifier` path yields an empty result without any
/// request being made. Request failures propagate.
pub async fn get_products_by_search_phrase(
    ctx: &PipelineContext,
    input: SearchInput,
) -> Result<SearchResult> {
    let client = BatteryIncludedClient::new(ctx)?;
    let identifier_path = ctx.config.product_identifier.trim();

    if !is_valid_path(identifier_path) {
        ctx.log.warn(&format!(
            "BatteryIncluded: Invalid identifier path \"{identifier_path}\"."
        ));
        return Ok(SearchResult::default());
    }

    let query = browse_query(&ctx.config, &input);
    let body = client.call(Endpoint::Browse, &query).await?;
    let response = BrowseResponse::from_value(&body);

    let product_ids: Vec<String> = response
        .hits
        .iter()
        .filter_map(|hit| get_by_path(&hit.document, identifier_path))
        .filter_map(scalar_to_string)
        .collect();

    if !response.hits.is_empty() && product_ids.is_empty() {
        ctx.log.warn(&format!(
            "BatteryIncluded: Identifier path \"{identifier_path}\" not found in any of the result documents."
        ));
    }

    Ok(SearchResult {
        product_ids,
        total_product_count: response.found,
    })
}

/// Builds the `/browse` query for a product search.
pub fn browse_query(config: &Config, input: &SearchInput) -> Query {
    let (page, per_page) = pagination(
        input.offset.unwrap_or(0),
        input.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    );

    let mut query = Query::new();
    query
        .set_opt("q", input.search_phrase.as_deref())
        .set("page", page)
        .set("per_page", per_page)
        .set_opt("v", super::locale_variant(config))
        .set_opt("sort", prepare_sort(input.sort.as_deref()));
    query.extend(prepare_filters(&input.filters));
    query
}

/// Converts offset/limit into 1-based `(page, per_page)`.
fn pagination(offset: i64, limit: i64) -> (i64, i64) {
    let page = if offset != 0 && limit > 0 {
        offset.div_euclid(limit).saturating_add(1)
    } else {
        1
    };
    let per_page = if limit > 0 { limit } else { DEFAULT_PAGE_SIZE };
    (page, per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryValue;
    use serde_json::json;

    #[test]
    fn pagination_from_offset_and_limit() {
        assert_eq!(pagination(0, 20), (1, 20));
        assert_eq!(pagination(20, 20), (2, 20));
        assert_eq!(pagination(45, 20), (3, 20));
        assert_eq!(pagination(9, 10), (1, 10));
    }

    #[test]
    fn pagination_falls_back_without_positive_limit() {
        assert_eq!(pagination(40, 0), (1, 20));
        assert_eq!(pagination(40, -5), (1, 20));
    }

    #[test]
    fn pagination_saturates_on_huge_offset() {
        assert_eq!(pagination(i64::MAX, 1), (i64::MAX, 1));
        assert_eq!(pagination(i64::MAX, 2), (i64::MAX / 2 + 1, 2));
    }

    #[test]
    fn browse_query_merges_all_parts() {
        let config = Config {
            locale: Some("de-DE".into()),
            ..Default::default()
        };
        let input: SearchInput = serde_json::from_value(json!({
            "searchPhrase": "shoe",
            "sort": "nameDesc",
            "offset": 40,
            "limit": 20,
            "filters": {
                "color": {"type": "multiselect", "values": ["red"]},
                "cat": {"type": "multiselect", "values": ["x"], "source": "categories"}
            }
        }))
        .unwrap();

        let query = browse_query(&config, &input);
        let pairs = query.to_pairs();
        let has = |k: &str, v: &str| pairs.iter().any(|(pk, pv)| pk == k && pv == v);
        assert!(has("q", "shoe"));
        assert!(has("page", "3"));
        assert!(has("per_page", "20"));
        assert!(has("v[locale]", "de-DE"));
        assert!(has("sort", "_product_i18n.name:desc"));
        assert!(has("f[color][]", "red"));
        assert!(!pairs.iter().any(|(k, _)| k.starts_with("f[cat]")));
    }

    #[test]
    fn browse_query_omits_absent_values() {
        let query = browse_query(&Config::default(), &SearchInput::default());
        assert_eq!(query.keys().collect::<Vec<_>>(), vec!["page", "per_page"]);
        assert_eq!(query.get("per_page"), Some(&QueryValue::Integer(20)));
    }
}
