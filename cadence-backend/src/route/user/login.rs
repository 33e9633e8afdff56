use axum::extract::State;
pub use cadence_api::user::login::Request;
use cadence_api::user::User;

use crate::Error;
use crate::app::state::App;
use crate::database::{Database, users};
use crate::http::extract::{Endpoint, Json};
use crate::http::response::Success;

pub async fn login(database: &Database, request: &Request) -> Result<User, Error> {
    database
        .filter::<users::User>(|user| {
            user.has_email(&request.email) && user.password == request.password
        })
        .await
        .into_iter()
        .next()
        .map(User::from)
        .ok_or(Error::Unauthenticated)
}

pub async fn login_handler(
    State(app): State<App>,
    endpoint: Endpoint,
    Json(request): Json<Request>,
) -> Result<Success<User>, Error> {
    Ok(endpoint.ok(login(&app.database, &request).await?))
}
