use axum::extract::State;
pub use cadence_api::song::hot::Request;
use cadence_api::song::Song;

use crate::aggregate;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Query};
use crate::http::response::Success;

pub async fn hot_songs(database: &Database, request: &Request, limit: usize) -> Vec<Song> {
    database.read(|data| aggregate::hot(&data.songs, request.genre.as_deref(), limit)).await
}

pub async fn hot_songs_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Query(request): Query<Request>,
) -> Success<Vec<Song>> {
    endpoint.ok(hot_songs(&app.database, &request, app.feed.hot_limit).await)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_hot_songs(mock: Mock) {
        let cold = mock.song().times_ever_played(1).genre("Rock".to_owned()).call().await;
        let warm = mock.song().times_ever_played(50).genre("Pop".to_owned()).call().await;
        let hot = mock.song().times_ever_played(500).genre("Rock".to_owned()).call().await;

        assert_eq!(
            hot_songs(mock.database(), &Request::default(), 10).await,
            [hot.clone(), warm.clone(), cold.clone()]
        );
        assert_eq!(hot_songs(mock.database(), &Request::default(), 1).await, [hot.clone()]);
        assert_eq!(
            hot_songs(mock.database(), &Request { genre: Some("rock".to_owned()) }, 10).await,
            [hot, cold]
        );
    }
}
