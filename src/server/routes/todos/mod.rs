use crate::server::router::TicklistState;
use axum::{Router, routing::get};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<TicklistState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
}
