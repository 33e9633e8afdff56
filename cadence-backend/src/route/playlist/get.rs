use axum::extract::State;
use cadence_api::playlist::{Full, Playlist};

use crate::Error;
use crate::app::state::App;
use crate::database::{Database, table};
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

/// Resolve the song ids of a playlist in order. Ids without a song are skipped.
pub async fn get_playlist(database: &Database, id: &str) -> Result<Full, Error> {
    database
        .read(|data| {
            let playlist: Playlist = table::get(&data.playlists, id)?.clone();
            let songs_content = playlist
                .songs
                .iter()
                .filter_map(|song_id| data.songs.iter().find(|song| &song.id == song_id))
                .cloned()
                .collect();
            Ok(Full { playlist, songs_content })
        })
        .await
}

pub async fn get_playlist_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
) -> Result<Success<Full>, Error> {
    Ok(endpoint.ok(get_playlist(&app.database, &id).await?))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::database::Entity;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_get_playlist(mock: Mock) {
        let first = mock.song().call().await;
        let second = mock.song().call().await;
        let playlist = mock
            .playlist()
            .created_by("1")
            .songs(vec![second.id.clone(), "missing".to_owned(), first.id.clone()])
            .call()
            .await;

        let full = get_playlist(mock.database(), &playlist.id).await.unwrap();
        assert_eq!(full.playlist, playlist);
        assert_eq!(full.songs_content, [second, first]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_missing_playlist(mock: Mock) {
        assert!(matches!(
            get_playlist(mock.database(), "missing").await,
            Err(Error::NotFound(Entity::Playlist))
        ));
    }
}
