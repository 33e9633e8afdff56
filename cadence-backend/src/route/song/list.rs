use axum::extract::State;
use cadence_api::song::Song;

use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::Endpoint;
use crate::http::response::Success;

pub async fn list_songs(database: &Database) -> Vec<Song> {
    database.all().await
}

pub async fn list_songs_handler(State(app): State<App>, endpoint: Endpoint) -> Success<Vec<Song>> {
    endpoint.ok(list_songs(&app.database).await)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_list_songs(mock: Mock) {
        let songs = [mock.song().call().await, mock.song().call().await];
        assert_eq!(list_songs(mock.database()).await, songs);
    }
}
