//! Pipeline steps. Each takes the step context plus an input payload and
//! performs at most one request against BatteryIncluded.

pub mod catalog;
pub mod filters;
pub mod search;
pub mod suggestions;

pub use catalog::get_catalog_service;
pub use filters::get_filters;
pub use search::get_products_by_search_phrase;
pub use suggestions::get_search_suggestions;

use crate::config::Config;
use crate::query::Query;

/// The `v[locale]` variant parameter, if a locale is configured.
pub(crate) fn locale_variant(config: &Config) -> Option<Query> {
    let locale = config.locale.as_deref()?;
    let mut variant = Query::new();
    variant.set("locale", locale);
    Some(variant)
}
