pub mod create;
mod delete;
pub mod get;
mod list;
mod login;
mod update;

use axum::Router;
use axum::routing::{get, post};

use crate::app::state::App;

pub fn router() -> Router<App> {
    Router::new()
        .route("/users", get(list::list_users_handler).post(create::create_user_handler))
        .route("/users/login", post(login::login_handler))
        .route(
            "/users/{id}",
            get(get::get_user_handler)
                .put(update::update_user_handler)
                .delete(delete::delete_user_handler),
        )
}
