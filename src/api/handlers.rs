//! HTTP request handlers

use super::intents::command_for_intent;
use super::types::{ErrorResponse, RequestBody, Session, SkillRequest, SkillResponse};
use super::AppState;
use crate::state_machine::{transition, Command, Reply, SessionState, StepSequence};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Skill endpoint for the voice platform
        .route("/", post(handle_skill_request))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Skill Requests
// ============================================================

async fn handle_skill_request(
    State(state): State<AppState>,
    Json(req): Json<SkillRequest>,
) -> Result<Json<SkillResponse>, AppError> {
    verify_application(state.application_id.as_deref(), req.session.as_ref())?;

    let session_state = resume_session(&state.steps, req.session.as_ref());

    let command = match req.request {
        RequestBody::LaunchRequest => Command::Start,
        RequestBody::IntentRequest { intent } => {
            command_for_intent(&intent.name).ok_or_else(|| {
                tracing::warn!(intent = %intent.name, "Rejected unknown intent");
                AppError::BadRequest(format!("Unknown intent: {}", intent.name))
            })?
        }
        RequestBody::SessionEndedRequest { reason } => {
            tracing::info!(
                reason = reason.as_deref().unwrap_or("unspecified"),
                "Session ended"
            );
            let reply = Reply::statement([]).render(state.templates.as_ref());
            return Ok(Json(SkillResponse::new(reply, session_state)));
        }
        RequestBody::Unsupported => {
            tracing::warn!("Rejected unsupported request type");
            return Err(AppError::BadRequest(
                "Unsupported request type".to_string(),
            ));
        }
    };

    let result = transition(session_state, &state.steps, command);
    tracing::debug!(
        ?command,
        terminal = command.is_terminal(),
        current_index = result.new_state.current_index,
        detail_enabled = result.new_state.detail_enabled,
        "Handled command"
    );

    let reply = result.reply.render(state.templates.as_ref());
    Ok(Json(SkillResponse::new(reply, result.new_state)))
}

/// State for this turn: carried over from the session, or fresh when the
/// session has just started.
fn resume_session(steps: &StepSequence, session: Option<&Session>) -> SessionState {
    if let Some(state) = session.and_then(Session::state) {
        return state.clamped(steps);
    }

    tracing::info!(
        session_id = session
            .and_then(|s| s.session_id.as_deref())
            .unwrap_or("unknown"),
        started_at = %chrono::Local::now().to_rfc3339(),
        "Session started"
    );
    SessionState::default()
}

fn verify_application(expected: Option<&str>, session: Option<&Session>) -> Result<(), AppError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let actual = session.and_then(Session::application_id);
    if actual == Some(expected) {
        Ok(())
    } else {
        tracing::warn!(application_id = ?actual, "Rejected request for another application");
        Err(AppError::Forbidden(
            "Request is not addressed to this skill".to_string(),
        ))
    }
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("diapering-skill ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    Forbidden(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
