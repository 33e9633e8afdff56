use axum::extract::State;
use cadence_api::playlist::Playlist;
pub use cadence_api::playlist::search::Request;

use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Query};
use crate::http::response::Success;

pub async fn search_playlists(database: &Database, request: &Request) -> Vec<Playlist> {
    let keyword = request.keyword.to_lowercase();
    database
        .filter(|playlist: &Playlist| {
            !playlist.private && playlist.name.to_lowercase().contains(&keyword)
        })
        .await
}

pub async fn search_playlists_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Query(request): Query<Request>,
) -> Success<Vec<Playlist>> {
    endpoint.ok(search_playlists(&app.database, &request).await)
}
