use std::sync::Arc;

use crate::config::Config;

const LOG_TARGET: &str = "battery_included";

/// Logging capability injected into every step.
pub trait StepLog: Send + Sync {
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards step logs to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLog;

impl StepLog for FacadeLog {
    fn debug(&self, message: &str) {
        log::debug!(target: LOG_TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: LOG_TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: LOG_TARGET, "{message}");
    }
}

/// What the pipeline passes to each step: configuration plus a logger.
#[derive(Clone)]
pub struct PipelineContext {
    pub config: Config,
    pub log: Arc<dyn StepLog>,
}

impl PipelineContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            log: Arc::new(FacadeLog),
        }
    }

    pub fn with_log(config: Config, log: Arc<dyn StepLog>) -> Self {
        Self { config, log }
    }
}

impl std::fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
