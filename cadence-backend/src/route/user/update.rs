use axum::extract::State;
pub use cadence_api::user::update::Request;
use cadence_api::user::User;

use crate::Error;
use crate::app::state::App;
use crate::database::table::{self, Table};
use crate::database::{Database, users};
use crate::http::extract::{Endpoint, Json, Path};
use crate::http::response::Success;

pub async fn update_user(database: &Database, id: &str, request: Request) -> Result<User, Error> {
    let Request { name, email, password, history_tracking } = request;
    database
        .write(|data| {
            table::get(&data.users, id)?;
            let taken = email.as_deref().is_some_and(|email| {
                data.users.iter().any(|user| user.id != id && user.has_email(email))
            });
            if taken {
                return Err(Error::EmailAlreadyRegistered);
            }
            table::update(users::User::rows_mut(data), id, |user: &mut users::User| {
                if let Some(name) = name {
                    user.name = name;
                }
                if let Some(email) = email {
                    user.email = email;
                }
                if let Some(password) = password {
                    user.password = password;
                }
                if let Some(history_tracking) = history_tracking {
                    user.history_tracking = history_tracking;
                }
                Ok(())
            })
        })
        .await
        .map(User::from)
}

pub async fn update_user_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Path(id): Path<String>,
    Json(request): Json<Request>,
) -> Result<Success<User>, Error> {
    Ok(endpoint.ok(update_user(&app.database, &id, request).await?))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::database::Entity;
    use crate::test::{Mock, mock};

    #[rstest]
    #[tokio::test]
    async fn test_update_user(mock: Mock) {
        let user = mock.user().call().await;
        let request = Request {
            name: Some("Zé".to_owned()),
            history_tracking: Some(false),
            ..Default::default()
        };
        let updated = update_user(mock.database(), &user.id, request).await.unwrap();
        assert_eq!(updated.name, "Zé");
        assert_eq!(updated.email, user.email);
        assert!(!updated.history_tracking);
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_user_keep_own_email(mock: Mock) {
        let user = mock.user().call().await;
        let request = Request { email: Some(user.email.clone()), ..Default::default() };
        assert!(update_user(mock.database(), &user.id, request).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_missing_user_with_taken_email(mock: Mock) {
        let other = mock.user().call().await;
        let request = Request { email: Some(other.email.clone()), ..Default::default() };
        assert!(matches!(
            update_user(mock.database(), "missing", request).await,
            Err(Error::NotFound(Entity::User))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_user_taken_email(mock: Mock) {
        let user = mock.user().call().await;
        let other = mock.user().call().await;
        let request = Request { email: Some(other.email.clone()), ..Default::default() };
        assert!(matches!(
            update_user(mock.database(), &user.id, request).await,
            Err(Error::EmailAlreadyRegistered)
        ));
    }
}
