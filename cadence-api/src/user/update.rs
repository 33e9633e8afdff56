use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub history_tracking: Option<bool>,
}
