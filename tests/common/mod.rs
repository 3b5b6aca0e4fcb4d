#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use battery_included::{Config, PipelineContext, StepLog};
use wiremock::MockServer;

pub const API_KEY: &str = "test-public-key";
pub const BROWSE_PATH: &str = "/api/v1/collections/products/documents/browse";
pub const SUGGEST_PATH: &str = "/api/v1/collections/products/documents/suggest";

/// Captures step logs so tests can assert on warnings and errors.
#[derive(Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingLog {
    fn push(&self, level: &'static str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }

    pub fn messages(&self, level: &str) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn all(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl StepLog for RecordingLog {
    fn debug(&self, message: &str) {
        self.push("debug", message);
    }

    fn warn(&self, message: &str) {
        self.push("warn", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }
}

pub fn config_for(server: &MockServer) -> Config {
    Config {
        public_api_key: API_KEY.into(),
        base_url: format!("{}/", server.uri()),
        collection: "products".into(),
        product_identifier: "sku.id".into(),
        locale: Some("de-DE".into()),
        ..Default::default()
    }
}

pub fn context(config: Config) -> (PipelineContext, Arc<RecordingLog>) {
    let log = Arc::new(RecordingLog::default());
    let ctx = PipelineContext::with_log(config, log.clone());
    (ctx, log)
}
