use axum::extract::State;
use cadence_api::playlist::Playlist;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::database::table::{self, Table};
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn delete_playlist(database: &Database, id: &str, user_id: &str) -> Result<(), Error> {
    database
        .write(|data| {
            if !table::get(&data.playlists, id)?.is_owner(user_id) {
                return Err(Error::Forbidden("delete this playlist"));
            }
            table::delete(Playlist::rows_mut(data), id)
        })
        .await?;
    tracing::info!(%id, %user_id, "playlist deleted");
    Ok(())
}

pub async fn delete_playlist_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<Success<()>, Error> {
    delete_playlist(&app.database, &id, &user_id).await?;
    Ok(endpoint.done())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::database::Entity;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_delete_playlist(mock: Mock) {
        let playlist = mock.playlist().created_by("1").call().await;
        delete_playlist(mock.database(), &playlist.id, "1").await.unwrap();
        assert!(matches!(
            mock.database().get::<Playlist>(&playlist.id).await,
            Err(Error::NotFound(Entity::Playlist))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_contributor_cannot_delete(mock: Mock) {
        let playlist =
            mock.playlist().created_by("1").contributors(vec!["2".to_owned()]).call().await;
        assert!(matches!(
            delete_playlist(mock.database(), &playlist.id, "2").await,
            Err(Error::Forbidden(_))
        ));
        assert!(mock.database().get::<Playlist>(&playlist.id).await.is_ok());
    }
}
