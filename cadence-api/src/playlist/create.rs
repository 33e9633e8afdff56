use serde::{Deserialize, Serialize};

use super::Playlist;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    #[cfg_attr(feature = "test", dummy(expr = "String::new()"))]
    pub id: String,
    pub name: String,
    pub created_by: String,
    #[serde(default)]
    #[cfg_attr(feature = "test", dummy(expr = "Vec::new()"))]
    pub songs: Vec<String>,
    #[serde(default)]
    pub private: bool,
}

impl From<Request> for Playlist {
    fn from(request: Request) -> Self {
        let Request { id, name, created_by, songs, private } = request;
        Self { id, name, created_by, songs, private, followers: vec![], contributors: vec![] }
    }
}
