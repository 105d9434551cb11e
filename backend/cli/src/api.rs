use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use logging::redact_sensitive_data;
use pantryforge_agent::ChefAgent;
use pantryforge_core::{Ingredient, RecipeCard};

/// Shared application state for API handlers.
pub struct AppState {
    pub agent: ChefAgent,
}

/// Build the Axum router with all API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/api/health", get(health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub recipes: Vec<RecipeCard>,
    pub inventory: Vec<Ingredient>,
    pub num_people: Option<u32>,
}

/// Handler for `POST /chat`: one conversation turn.
///
/// The user always gets a reply message; only a transport-level provider
/// failure produces the error shape (same fields, empty lists).
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ChatResponse>)> {
    match state.agent.handle_turn(&req.user_id, &req.message).await {
        Ok(outcome) => Ok(Json(ChatResponse {
            message: outcome.reply.message,
            recipes: outcome.recipes,
            inventory: outcome.pantry.ingredients,
            num_people: outcome.pantry.num_people,
        })),
        Err(e) => {
            let detail = redact_sensitive_data(&e.to_string());
            tracing::error!(user_id = %req.user_id, error = %detail, "Chat turn failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ChatResponse {
                    message: detail,
                    recipes: Vec::new(),
                    inventory: Vec::new(),
                    num_people: None,
                }),
            ))
        }
    }
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "pantryforge",
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": state.agent.store().session_count().await,
    }))
}
