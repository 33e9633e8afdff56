pub mod create;
pub mod login;
pub mod update;

use serde::{Deserialize, Serialize};

/// Public view of an account, the password never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub history_tracking: bool,
}
