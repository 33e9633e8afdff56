use axum::extract::State;
use cadence_api::history::History;

use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn clear_history(database: &Database, user_id: &str) -> usize {
    let removed = database.delete_where(|history: &History| history.user_id == user_id).await;
    tracing::debug!(%user_id, removed, "history cleared");
    removed
}

pub async fn clear_history_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(user_id): Path<String>,
) -> Success<()> {
    clear_history(&app.database, &user_id).await;
    endpoint.done()
}
