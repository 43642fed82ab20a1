//! HTTP adapter between the voice platform and the step navigator

mod handlers;
mod intents;
mod types;

pub use handlers::create_router;

use crate::state_machine::StepSequence;
use crate::templates::TemplateCatalog;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub steps: Arc<StepSequence>,
    pub templates: Arc<TemplateCatalog>,
    /// Reject requests addressed to any other skill
    pub application_id: Option<String>,
}

impl AppState {
    pub fn new(
        steps: StepSequence,
        templates: TemplateCatalog,
        application_id: Option<String>,
    ) -> Self {
        Self {
            steps: Arc::new(steps),
            templates: Arc::new(templates),
            application_id,
        }
    }
}
