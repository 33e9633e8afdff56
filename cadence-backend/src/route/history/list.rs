use axum::extract::State;
use cadence_api::history::History;

use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::Endpoint;
use crate::http::response::Success;

pub async fn list_histories(database: &Database) -> Vec<History> {
    database.all().await
}

pub async fn list_histories_handler(
    State(app): State<App>,
    endpoint: Endpoint,
) -> Success<Vec<History>> {
    endpoint.ok(list_histories(&app.database).await)
}
