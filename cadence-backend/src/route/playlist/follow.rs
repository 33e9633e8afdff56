use axum::extract::State;
use cadence_api::playlist::Playlist;
use cadence_api::playlist::caller::Request;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Json, Path};
use crate::http::response::Success;

/// Following twice is a no-op. Private playlists only accept followers that can edit them.
pub async fn follow(database: &Database, id: &str, user_id: &str) -> Result<Playlist, Error> {
    database
        .update(id, |playlist: &mut Playlist| {
            if playlist.private && !playlist.can_edit(user_id) {
                return Err(Error::Forbidden("follow this private playlist"));
            }
            if !playlist.followers.iter().any(|follower| follower == user_id) {
                playlist.followers.push(user_id.to_owned());
            }
            Ok(())
        })
        .await
}

pub async fn follow_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
    Json(request): Json<Request>,
) -> Result<Success<Playlist>, Error> {
    Ok(endpoint.ok(follow(&app.database, &id, &request.user_id).await?))
}

pub async fn unfollow(database: &Database, id: &str, user_id: &str) -> Result<Playlist, Error> {
    database
        .update(id, |playlist: &mut Playlist| {
            playlist.followers.retain(|follower| follower != user_id);
            Ok(())
        })
        .await
}

pub async fn unfollow_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
    Json(request): Json<Request>,
) -> Result<Success<Playlist>, Error> {
    Ok(endpoint.ok(unfollow(&app.database, &id, &request.user_id).await?))
}
