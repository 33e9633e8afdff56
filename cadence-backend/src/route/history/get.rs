use axum::extract::State;
use cadence_api::history::History;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn get_history(database: &Database, id: &str) -> Result<History, Error> {
    database.get(id).await
}

pub async fn get_history_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
) -> Result<Success<History>, Error> {
    Ok(endpoint.ok(get_history(&app.database, &id).await?))
}
