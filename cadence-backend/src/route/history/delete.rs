use axum::extract::State;
use cadence_api::history::History;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn delete_history(database: &Database, id: &str) -> Result<(), Error> {
    database.delete::<History>(id).await?;
    Ok(())
}

pub async fn delete_history_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
) -> Result<Success<()>, Error> {
    delete_history(&app.database, &id).await?;
    Ok(endpoint.done())
}
