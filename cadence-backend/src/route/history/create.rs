use axum::extract::State;
pub use cadence_api::history::create::Request;
use cadence_api::history::History;
use time::OffsetDateTime;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::database::table::{self, Table};
use crate::http::extract::{Endpoint, Json};
use crate::http::response::Success;

/// Record a play. Unknown users and songs are accepted, but a known user must have history
/// tracking enabled and a known song gets its global play count bumped.
pub async fn create_history(database: &Database, request: Request) -> Result<History, Error> {
    let Request { id, user_id, song_id } = request;
    let history = database
        .write(|data| {
            if data.users.iter().any(|user| user.id == user_id && !user.history_tracking) {
                return Err(Error::HistoryTrackingDisabled);
            }
            let history = table::insert(
                History::rows_mut(data),
                History { id, user_id, song_id, played_at: OffsetDateTime::now_utc() },
            )?;
            if let Some(song) = data.songs.iter_mut().find(|song| song.id == history.song_id) {
                song.times_ever_played = song.times_ever_played.saturating_add(1);
            }
            Ok(history)
        })
        .await?;
    tracing::debug!(user_id = %history.user_id, song_id = %history.song_id, "play recorded");
    Ok(history)
}

pub async fn create_history_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Json(request): Json<Request>,
) -> Result<Success<History>, Error> {
    Ok(endpoint.ok(create_history(&app.database, request).await?))
}
