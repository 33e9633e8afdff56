pub mod create;
pub mod hot;
pub mod search;
pub mod update;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Length of the song in seconds.
    pub duration: u32,
    pub times_ever_played: u32,
}

impl Song {
    pub fn is_genre(&self, genre: &str) -> bool {
        self.genre.eq_ignore_ascii_case(genre)
    }
}
