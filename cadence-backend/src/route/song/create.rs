use axum::extract::State;
pub use cadence_api::song::create::Request;
use cadence_api::song::Song;

use crate::Error;
use crate::app::state::App;
use crate::database::Database;
use crate::http::extract::{Endpoint, Json};
use crate::http::response::Success;

pub async fn create_song(database: &Database, request: Request) -> Result<Song, Error> {
    let song = database.insert(Song::from(request)).await?;
    tracing::debug!(id = %song.id, title = %song.title, "song created");
    Ok(song)
}

pub async fn create_song_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Json(request): Json<Request>,
) -> Result<Success<Song>, Error> {
    Ok(endpoint.ok(create_song(&app.database, request).await?))
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};
    use rstest::rstest;

    use super::*;
    use crate::route::song::get::get_song;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_create_song(mock: Mock) {
        let request: Request = Faker.fake();
        let song = create_song(mock.database(), request.clone()).await.unwrap();
        assert!(!song.id.is_empty());
        assert_eq!(song.title, request.title);
        assert_eq!(song.duration, request.duration);
        assert_eq!(get_song(mock.database(), &song.id).await.unwrap(), song);
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_song_keeps_given_id(mock: Mock) {
        let request = Request { id: "peanut".to_owned(), ..Faker.fake() };
        assert_eq!(create_song(mock.database(), request.clone()).await.unwrap().id, "peanut");
        assert!(matches!(
            create_song(mock.database(), request).await,
            Err(Error::AlreadyExists(_))
        ));
    }
}
