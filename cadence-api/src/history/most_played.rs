use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostPlayed {
    pub song_id: String,
    pub times_played: u32,
}
