use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub user_id: String,
    pub name: Option<String>,
    pub songs: Option<Vec<String>>,
    pub private: Option<bool>,
}
