//! Child Care Diapering - voice skill
//!
//! Walks a caregiver through the diaper changing steps one at a time, with
//! next, go back, start over and detail/summary navigation.

mod api;
mod config;
mod state_machine;
mod templates;

use api::{create_router, AppState};
use config::SkillConfig;
use state_machine::StepSequence;
use templates::TemplateCatalog;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diapering_skill=debug,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = SkillConfig::from_env();

    let steps = StepSequence::diapering();
    let templates = match &config.templates_path {
        Some(path) => TemplateCatalog::from_file(path)?,
        None => TemplateCatalog::builtin(),
    };
    templates.validate(&steps)?;

    if config.application_id.is_none() {
        tracing::warn!("DIAPERING_APPLICATION_ID not set; accepting requests for any skill");
    }

    let state = AppState::new(steps, templates, config.application_id.clone());
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.addr();
    tracing::info!("Diapering skill listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
