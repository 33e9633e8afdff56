use axum::extract::State;
pub use cadence_api::song::update::Request;
use cadence_api::song::Song;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Json, Path};
use crate::http::response::Success;

pub async fn update_song(database: &Database, id: &str, request: Request) -> Result<Song, Error> {
    database
        .update(id, |song| {
            request.apply(song);
            Ok(())
        })
        .await
}

pub async fn update_song_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
    Json(request): Json<Request>,
) -> Result<Success<Song>, Error> {
    Ok(endpoint.ok(update_song(&app.database, &id, request).await?))
}
