//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the shared,
//! clonable resources every handler needs.

use crate::config::Config;
use eduagent_core::tutor::{TemplateTutor, TutorService};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub tutor: Arc<dyn TutorService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(tutor: Arc<dyn TutorService>, config: Config) -> Self {
        Self {
            tutor,
            config: Arc::new(config),
        }
    }

    /// State backed by the template tutor.
    pub fn with_templates(config: Config) -> Self {
        Self::new(Arc::new(TemplateTutor::new()), config)
    }
}
