//! Application state for the Practice Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::resolution::MatchResolutionOrchestrator;
use crate::store::ConfirmationStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded practice configuration and the orchestrator that routes events
/// through matching, stored decisions, and payroll calculation.
#[derive(Clone)]
pub struct AppState {
    /// The loaded practice configuration.
    config: Arc<ConfigLoader>,
    /// The orchestrator shared by all reconciliation endpoints.
    orchestrator: Arc<MatchResolutionOrchestrator>,
}

impl AppState {
    /// Creates a new application state from the given configuration loader
    /// and confirmation store.
    ///
    /// The orchestrator is wired from the loader: merged special keywords,
    /// the matching word limit, and the supervision pricing.
    pub fn new(config: ConfigLoader, store: Arc<dyn ConfirmationStore>) -> Self {
        let orchestrator = MatchResolutionOrchestrator::new(
            store,
            config.special_keywords(),
            config.match_word_limit(),
            Some(config.supervision().clone()),
        );
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the match resolution orchestrator.
    pub fn orchestrator(&self) -> &MatchResolutionOrchestrator {
        &self.orchestrator
    }
}
