pub mod clear;
pub mod create;
mod delete;
mod get;
mod list;
mod most_played;
mod recommendations;
mod statistics;
pub mod user_history;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::app::state::App;

pub fn router() -> Router<App> {
    Router::new()
        .route("/histories", get(list::list_histories_handler))
        .route("/history", post(create::create_history_handler))
        .route(
            "/history/{id}",
            get(get::get_history_handler).delete(delete::delete_history_handler),
        )
        .route("/user/{id}/history", get(user_history::user_history_handler))
        .route("/user/{id}/history/clear", delete(clear::clear_history_handler))
        .route("/user/{id}/hot", get(most_played::most_played_handler))
        .route("/user/{id}/statistics", get(statistics::statistics_handler))
        .route(
            "/feed/user/{id}/recommendations",
            get(recommendations::recommendations_handler),
        )
}
