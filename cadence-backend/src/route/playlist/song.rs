use axum::extract::State;
use cadence_api::playlist::Playlist;
use cadence_api::playlist::caller::Request;

use crate::Error;
use crate::app::state::App;
use crate::database::table::{self, Table};
use crate::database::{Database, Entity};
use crate::http::extract::{Endpoint, Json, Path};
use crate::http::response::Success;

pub async fn add_song(
    database: &Database,
    id: &str,
    song_id: &str,
    user_id: &str,
) -> Result<Playlist, Error> {
    database
        .write(|data| {
            if !table::get(&data.playlists, id)?.can_edit(user_id) {
                return Err(Error::Forbidden("add songs to this playlist"));
            }
            if !data.songs.iter().any(|song| song.id == song_id) {
                return Err(Error::NotFound(Entity::Song));
            }
            table::update(Playlist::rows_mut(data), id, |playlist: &mut Playlist| {
                if !playlist.songs.iter().any(|song| song == song_id) {
                    playlist.songs.push(song_id.to_owned());
                }
                Ok(())
            })
        })
        .await
}

pub async fn add_song_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path((id, song_id)): Path<(String, String)>,
    Json(request): Json<Request>,
) -> Result<Success<Playlist>, Error> {
    Ok(endpoint.ok(add_song(&app.database, &id, &song_id, &request.user_id).await?))
}

pub async fn remove_song(
    database: &Database,
    id: &str,
    song_id: &str,
    user_id: &str,
) -> Result<Playlist, Error> {
    database
        .update(id, |playlist: &mut Playlist| {
            if !playlist.can_edit(user_id) {
                return Err(Error::Forbidden("remove songs from this playlist"));
            }
            playlist.songs.retain(|song| song != song_id);
            Ok(())
        })
        .await
}

pub async fn remove_song_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path((id, song_id)): Path<(String, String)>,
    Json(request): Json<Request>,
) -> Result<Success<Playlist>, Error> {
    Ok(endpoint.ok(remove_song(&app.database, &id, &song_id, &request.user_id).await?))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test::{Mock, mock};

    #[rstest]
    #[case("1")]
    #[case("2")]
    #[tokio::test]
    async fn test_add_song(mock: Mock, #[case] user_id: &str) {
        let song = mock.song().call().await;
        let playlist = mock
            .playlist()
            .created_by("1")
            .songs(vec!["other".to_owned()])
            .contributors(vec!["2".to_owned()])
            .call()
            .await;

        let updated = add_song(mock.database(), &playlist.id, &song.id, user_id).await.unwrap();
        assert_eq!(updated.songs, ["other".to_owned(), song.id.clone()]);

        let updated = add_song(mock.database(), &playlist.id, &song.id, user_id).await.unwrap();
        assert_eq!(updated.songs, ["other".to_owned(), song.id]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_missing_song(mock: Mock) {
        let playlist = mock.playlist().created_by("1").call().await;
        assert!(matches!(
            add_song(mock.database(), &playlist.id, "missing", "1").await,
            Err(Error::NotFound(Entity::Song))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_song_forbidden(mock: Mock) {
        let song = mock.song().call().await;
        let playlist = mock.playlist().created_by("1").call().await;
        assert!(matches!(
            add_song(mock.database(), &playlist.id, &song.id, "2").await,
            Err(Error::Forbidden(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_song(mock: Mock) {
        let playlist = mock
            .playlist()
            .created_by("1")
            .songs(vec!["1".to_owned(), "2".to_owned(), "3".to_owned()])
            .call()
            .await;

        let updated = remove_song(mock.database(), &playlist.id, "2", "1").await.unwrap();
        assert_eq!(updated.songs, ["1", "3"]);
        assert!(matches!(
            remove_song(mock.database(), &playlist.id, "1", "2").await,
            Err(Error::Forbidden(_))
        ));
    }
}
