pub mod caller;
pub mod create;
pub mod search;
pub mod update;

use serde::{Deserialize, Serialize};

use crate::song::Song;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub created_by: String,
    /// Song ids in play order.
    pub songs: Vec<String>,
    pub private: bool,
    pub followers: Vec<String>,
    pub contributors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Full {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub songs_content: Vec<Song>,
}

impl Playlist {
    pub fn is_owner(&self, user_id: &str) -> bool {
        self.created_by == user_id
    }

    pub fn is_contributor(&self, user_id: &str) -> bool {
        self.contributors.iter().any(|contributor| contributor == user_id)
    }

    pub fn can_edit(&self, user_id: &str) -> bool {
        self.is_owner(user_id) || self.is_contributor(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_camel_case() {
        let playlist = Playlist {
            id: "1".to_owned(),
            name: "My Favorites".to_owned(),
            created_by: "1".to_owned(),
            songs: vec!["1".to_owned()],
            private: false,
            followers: vec![],
            contributors: vec![],
        };
        let value = serde_json::to_value(Full { playlist, songs_content: vec![] }).unwrap();
        assert_eq!(value["createdBy"], "1");
        assert_eq!(value["songsContent"], serde_json::json!([]));
        assert_eq!(value["songs"], serde_json::json!(["1"]));
    }
}
