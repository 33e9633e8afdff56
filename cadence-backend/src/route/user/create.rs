use axum::extract::State;
pub use cadence_api::user::create::Request;
use cadence_api::user::User;

use crate::Error;
use crate::app::state::App;
use crate::database::table::{self, Table};
use crate::database::{Database, users};
use crate::http::extract::{Endpoint, Json};
use crate::http::response::Success;

pub async fn create_user(database: &Database, request: Request) -> Result<User, Error> {
    if request.email.trim().is_empty() {
        return Err(Error::InvalidParameter("Email should not be empty"));
    }

    let user = database
        .write(|data| {
            if data.users.iter().any(|user| user.has_email(&request.email)) {
                return Err(Error::EmailAlreadyRegistered);
            }
            table::insert(users::User::rows_mut(data), users::User::from(request))
        })
        .await?;
    tracing::info!(id = %user.id, "user registered");
    Ok(user.into())
}

pub async fn create_user_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Json(request): Json<Request>,
) -> Result<Success<User>, Error> {
    Ok(endpoint.ok(create_user(&app.database, request).await?))
}
