use axum::extract::State;
use cadence_api::playlist::Playlist;
use cadence_api::playlist::caller::Request;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Json, Path};
use crate::http::response::Success;

pub async fn add_contributor(
    database: &Database,
    id: &str,
    contributor_id: &str,
    user_id: &str,
) -> Result<Playlist, Error> {
    database
        .update(id, |playlist: &mut Playlist| {
            if !playlist.is_owner(user_id) {
                return Err(Error::Forbidden("manage contributors of this playlist"));
            }
            if playlist.is_contributor(contributor_id) {
                return Err(Error::AlreadyContributor);
            }
            playlist.contributors.push(contributor_id.to_owned());
            Ok(())
        })
        .await
}

pub async fn add_contributor_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path((id, contributor_id)): Path<(String, String)>,
    Json(request): Json<Request>,
) -> Result<Success<Playlist>, Error> {
    Ok(endpoint.ok(add_contributor(&app.database, &id, &contributor_id, &request.user_id).await?))
}

pub async fn remove_contributor(
    database: &Database,
    id: &str,
    contributor_id: &str,
    user_id: &str,
) -> Result<Playlist, Error> {
    database
        .update(id, |playlist: &mut Playlist| {
            if !playlist.is_owner(user_id) {
                return Err(Error::Forbidden("manage contributors of this playlist"));
            }
            if !playlist.is_contributor(contributor_id) {
                return Err(Error::NotContributor);
            }
            playlist.contributors.retain(|contributor| contributor != contributor_id);
            Ok(())
        })
        .await
}

pub async fn remove_contributor_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path((id, contributor_id)): Path<(String, String)>,
    Json(request): Json<Request>,
) -> Result<Success<Playlist>, Error> {
    Ok(endpoint.ok(
        remove_contributor(&app.database, &id, &contributor_id, &request.user_id).await?,
    ))
}
