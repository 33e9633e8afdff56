use axum::extract::State;
use cadence_api::history::History;
use cadence_api::history::most_played::MostPlayed;

use crate::aggregate;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn most_played(database: &Database, user_id: &str) -> Vec<MostPlayed> {
    let histories = database.filter(|history: &History| history.user_id == user_id).await;
    aggregate::most_played(&histories)
}

pub async fn most_played_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(user_id): Path<String>,
) -> Success<Vec<MostPlayed>> {
    endpoint.ok(most_played(&app.database, &user_id).await)
}
