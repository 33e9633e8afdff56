use axum::extract::State;
use cadence_api::playlist::Playlist;

use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn list_playlists(database: &Database) -> Vec<Playlist> {
    database.all().await
}

pub async fn list_playlists_handler(
    State(app): State<App>,
    endpoint: Endpoint,
) -> Success<Vec<Playlist>> {
    endpoint.ok(list_playlists(&app.database).await)
}

pub async fn my_playlists(database: &Database, user_id: &str) -> Vec<Playlist> {
    database.filter(|playlist: &Playlist| playlist.is_owner(user_id)).await
}

pub async fn my_playlists_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(user_id): Path<String>,
) -> Success<Vec<Playlist>> {
    endpoint.ok(my_playlists(&app.database, &user_id).await)
}
