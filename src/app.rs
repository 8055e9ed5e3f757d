use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/subjects", post(handlers::form_add_subject))
        .route("/subjects/:id", post(handlers::form_update_subject))
        .route("/subjects/:id/delete", post(handlers::form_delete_subject))
        .route(
            "/api/subjects",
            get(handlers::list_subjects)
                .post(handlers::create_subject)
                .delete(handlers::reset_subjects),
        )
        .route(
            "/api/subjects/:id",
            get(handlers::get_subject)
                .put(handlers::update_subject)
                .delete(handlers::delete_subject),
        )
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/reports", get(handlers::get_report))
        .route("/api/reports/csv", get(handlers::download_csv))
        .with_state(state)
}
