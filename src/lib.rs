//! Adapter between a commerce pipeline and the BatteryIncluded
//! document-search API: product search, filter facets and autocomplete.

pub mod builders;
pub mod client;
pub mod config;
pub mod context;
pub mod data_models;
pub mod document;
pub mod error;
pub mod models;
pub mod query;
pub mod steps;

pub use client::{BatteryIncludedClient, Endpoint};
pub use config::{Config, FilterFacet};
pub use context::{FacadeLog, PipelineContext, StepLog};
pub use error::{AdapterError, RequestFailure, Result};
pub use steps::{
    get_catalog_service, get_filters, get_products_by_search_phrase, get_search_suggestions,
};
