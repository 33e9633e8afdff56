use axum::extract::State;
use cadence_api::history::statistics::Statistics;

use crate::aggregate;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn statistics(database: &Database, user_id: &str) -> Statistics {
    database
        .read(|data| {
            let histories: Vec<_> = data
                .histories
                .iter()
                .filter(|history| history.user_id == user_id)
                .cloned()
                .collect();
            aggregate::statistics(&histories, &data.songs)
        })
        .await
}

pub async fn statistics_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(user_id): Path<String>,
) -> Success<Statistics> {
    endpoint.ok(statistics(&app.database, &user_id).await)
}
