use axum::extract::State;

use crate::Error;
use crate::app::state::App;
use crate::database::{Database, users};
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn delete_user(database: &Database, id: &str) -> Result<(), Error> {
    database.delete::<users::User>(id).await?;
    tracing::info!(%id, "user deleted");
    Ok(())
}

pub async fn delete_user_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
) -> Result<Success<()>, Error> {
    delete_user(&app.database, &id).await?;
    Ok(endpoint.done())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::database::Entity;
    use crate::route::user::get::get_user;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_delete_user(mock: Mock) {
        let user = mock.user().call().await;
        delete_user(mock.database(), &user.id).await.unwrap();
        assert!(matches!(
            get_user(mock.database(), &user.id).await,
            Err(Error::NotFound(Entity::User))
        ));
    }
}
