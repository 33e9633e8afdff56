use axum::extract::State;
use cadence_api::history::History;

use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn user_history(database: &Database, user_id: &str) -> Vec<History> {
    database.filter(|history: &History| history.user_id == user_id).await
}

pub async fn user_history_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(user_id): Path<String>,
) -> Success<Vec<History>> {
    endpoint.ok(user_history(&app.database, &user_id).await)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_user_history(mock: Mock) {
        let first = mock.history().user_id("1").song_id("1").call().await;
        mock.history().user_id("2").song_id("2").call().await;
        let second = mock.history().user_id("1").song_id("3").call().await;
        let third = mock.history().user_id("1").song_id("2").call().await;

        assert_eq!(user_history(mock.database(), "1").await, [first, second, third]);
        assert!(user_history(mock.database(), "3").await.is_empty());
    }
}
