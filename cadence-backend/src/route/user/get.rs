use axum::extract::State;
use cadence_api::user::User;

use crate::Error;
use crate::app::state::App;
use crate::database::{Database, users};
use crate::http::extract::{Endpoint, Path};
use crate::http::response::Success;

pub async fn get_user(database: &Database, id: &str) -> Result<User, Error> {
    database.get::<users::User>(id).await.map(User::from)
}

pub async fn get_user_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
) -> Result<Success<User>, Error> {
    Ok(endpoint.ok(get_user(&app.database, &id).await?))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::database::Entity;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_get_user(mock: Mock) {
        let user = mock.user().history_tracking(false).call().await;
        assert_eq!(
            get_user(mock.database(), &user.id).await.unwrap(),
            User {
                id: user.id.clone(),
                name: user.name.clone(),
                email: user.email.clone(),
                history_tracking: false,
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_missing_user(mock: Mock) {
        assert!(matches!(
            get_user(mock.database(), "missing").await,
            Err(Error::NotFound(Entity::User))
        ));
    }
}
