use axum::extract::State;
use cadence_api::user::User;

use crate::app::state::App;
use crate::database::{Database, users};
use crate::http::extract::Endpoint;
use crate::http::response::Success;

pub async fn list_users(database: &Database) -> Vec<User> {
    database.all::<users::User>().await.into_iter().map(User::from).collect()
}

pub async fn list_users_handler(State(app): State<App>, endpoint: Endpoint) -> Success<Vec<User>> {
    endpoint.ok(list_users(&app.database).await)
}
