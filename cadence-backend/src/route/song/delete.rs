use axum::extract::State;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn delete_song(database: &Database, id: &str) -> Result<(), Error> {
    database.delete::<cadence_api::song::Song>(id).await?;
    Ok(())
}

pub async fn delete_song_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
) -> Result<Success<()>, Error> {
    delete_song(&app.database, &id).await?;
    Ok(endpoint.done())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::database::Entity;
    use crate::route::song::get::get_song;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_delete_song(mock: Mock) {
        let song = mock.song().call().await;
        delete_song(mock.database(), &song.id).await.unwrap();
        assert!(matches!(
            get_song(mock.database(), &song.id).await,
            Err(Error::NotFound(Entity::Song))
        ));
    }
}
