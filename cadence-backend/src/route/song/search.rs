use axum::extract::State;
pub use cadence_api::song::search::Request;
use cadence_api::song::Song;

use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Query};
use crate::http::response::Success;

pub async fn search_songs(database: &Database, request: &Request) -> Vec<Song> {
    database.filter(|song| request.matches(song)).await
}

pub async fn search_songs_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Query(request): Query<Request>,
) -> Success<Vec<Song>> {
    endpoint.ok(search_songs(&app.database, &request).await)
}
