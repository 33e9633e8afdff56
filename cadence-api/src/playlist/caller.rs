use serde::{Deserialize, Serialize};

/// Body shared by the playlist actions, identifying who performs them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub user_id: String,
}
