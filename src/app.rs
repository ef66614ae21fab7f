use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/catalog", get(handlers::get_catalog))
        .route("/api/moods", get(handlers::list_moods).post(handlers::add_mood))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/todos", get(handlers::list_todos).post(handlers::add_todo))
        .route("/api/todos/:index", delete(handlers::remove_todo))
        .route("/api/todos/:index/toggle", post(handlers::toggle_todo))
        .route(
            "/api/wellness",
            get(handlers::get_wellness).post(handlers::update_wellness),
        )
        .route("/api/songs", get(handlers::get_songs))
        .route("/api/quote", get(handlers::get_quote))
        .route("/api/export", get(handlers::export_session))
        .with_state(state)
}
