use axum::extract::State;
use cadence_api::song::Song;

use crate::aggregate;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn recommendations(database: &Database, user_id: &str, limit: usize) -> Vec<Song> {
    database
        .read(|data| {
            let histories: Vec<_> = data
                .histories
                .iter()
                .filter(|history| history.user_id == user_id)
                .cloned()
                .collect();
            aggregate::recommendations(&histories, &data.songs, limit)
        })
        .await
}

pub async fn recommendations_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(user_id): Path<String>,
) -> Success<Vec<Song>> {
    endpoint.ok(recommendations(&app.database, &user_id, app.feed.recommendation_limit).await)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_recommendations(mock: Mock) {
        let played = mock.song().genre("MPB".to_owned()).times_ever_played(100).call().await;
        let mpb = mock.song().genre("MPB".to_owned()).times_ever_played(3).call().await;
        let rock = mock.song().genre("Rock".to_owned()).times_ever_played(80).call().await;
        mock.history().user_id("1").song_id(&played.id).call().await;

        assert_eq!(recommendations(mock.database(), "1", 10).await, [mpb.clone(), rock]);
        assert_eq!(recommendations(mock.database(), "1", 1).await, [mpb]);
    }
}
