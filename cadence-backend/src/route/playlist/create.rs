use axum::extract::State;
pub use cadence_api::playlist::create::Request;
use cadence_api::playlist::Playlist;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Json};
use crate::http::response::Success;

pub async fn create_playlist(database: &Database, request: Request) -> Result<Playlist, Error> {
    if request.name.trim().is_empty() {
        return Err(Error::InvalidParameter("Playlist name should not be empty"));
    }

    let playlist = database.insert(Playlist::from(request)).await?;
    tracing::debug!(id = %playlist.id, created_by = %playlist.created_by, "playlist created");
    Ok(playlist)
}

pub async fn create_playlist_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Json(request): Json<Request>,
) -> Result<Success<Playlist>, Error> {
    Ok(endpoint.ok(create_playlist(&app.database, request).await?))
}
