use axum::extract::State;
use cadence_api::song::Song;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn get_song(database: &Database, id: &str) -> Result<Song, Error> {
    database.get(id).await
}

pub async fn get_song_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
) -> Result<Success<Song>, Error> {
    Ok(endpoint.ok(get_song(&app.database, &id).await?))
}
