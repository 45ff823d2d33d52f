use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::quiz::home))
        .nest("/quizzes", quiz_routes())
}

fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::quiz::list_quizzes).post(handlers::quiz::create_quiz),
        )
        .route("/new", get(handlers::quiz::new_quiz))
        .route("/randomplay", get(handlers::random_play::random_play))
        .route(
            "/randomcheck/{id}",
            get(handlers::random_play::random_check),
        )
        .route(
            "/{id}",
            get(handlers::quiz::show_quiz)
                .put(handlers::quiz::update_quiz)
                .delete(handlers::quiz::delete_quiz),
        )
        .route("/{id}/edit", get(handlers::quiz::edit_quiz))
        .route("/{id}/play", get(handlers::quiz::play_quiz))
        .route("/{id}/check", get(handlers::quiz::check_quiz))
        .route(
            "/{id}/randomcheck",
            get(handlers::random_play::random_check),
        )
}
