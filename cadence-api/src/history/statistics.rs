use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Total listening time in seconds.
    pub time_played: u64,
    pub most_played_genre: Option<String>,
    /// Title of the song played the most.
    pub most_played_song: Option<String>,
}
