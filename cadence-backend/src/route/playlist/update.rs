use axum::extract::State;
pub use cadence_api::playlist::update::Request;
use cadence_api::playlist::Playlist;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Json, Path};
use crate::http::response::Success;

pub async fn update_playlist(
    database: &Database,
    id: &str,
    request: Request,
) -> Result<Playlist, Error> {
    let Request { user_id, name, songs, private } = request;
    if name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(Error::InvalidParameter("Playlist name should not be empty"));
    }

    database
        .update(id, |playlist: &mut Playlist| {
            if !playlist.can_edit(&user_id) {
                return Err(Error::Forbidden("edit this playlist"));
            }
            if let Some(name) = name {
                playlist.name = name;
            }
            if let Some(songs) = songs {
                playlist.songs = songs;
            }
            if let Some(private) = private {
                playlist.private = private;
            }
            Ok(())
        })
        .await
}

pub async fn update_playlist_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
    Json(request): Json<Request>,
) -> Result<Success<Playlist>, Error> {
    Ok(endpoint.ok(update_playlist(&app.database, &id, request).await?))
}
