use serde_json::Value;

use crate::client::{BatteryIncludedClient, Endpoint};
use crate::context::PipelineContext;
use crate::data_models::SuggestItem;
use crate::document::is_truthy;
use crate::error::Result;
use crate::models::{SuggestionInput, SuggestionResult};
use crate::query::Query;

const QUERY_COMPLETION: &str = "query-completion";

/// Autocomplete suggestions for a partial search phrase.
pub async fn get_search_suggestions(
    ctx: &PipelineContext,
    input: SuggestionInput,
) -> Result<SuggestionResult> {
    let client = BatteryIncludedClient::new(ctx)?;

    let mut query = Query::new();
    query
        .set_opt("q", input.search_phrase.as_deref())
        .set_opt("v", super::locale_variant(&ctx.config));

    let body = client.call(Endpoint::Suggest, &query).await?;
    Ok(SuggestionResult {
        suggestions: extract_suggestions(body),
    })
}

/// Collects the completion values from a `/suggest` response body.
pub fn extract_suggestions(body: Value) -> Vec<String> {
    let Value::Array(items) = body else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<SuggestItem>(item).ok())
        .filter(|item| item.kind.as_deref() == Some(QUERY_COMPLETION))
        .flat_map(|item| item.hits)
        .map(|hit| hit.value)
        .filter(is_truthy)
        .filter_map(|value| match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}
