use serde::{Deserialize, Serialize};

use super::Song;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    #[serde(default)]
    #[cfg_attr(feature = "test", dummy(expr = "String::new()"))]
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    #[cfg_attr(feature = "test", dummy(faker = "1..600"))]
    pub duration: u32,
    #[serde(default)]
    #[cfg_attr(feature = "test", dummy(faker = "0..1000"))]
    pub times_ever_played: u32,
}

impl From<Request> for Song {
    fn from(request: Request) -> Self {
        let Request { id, title, artist, genre, duration, times_ever_played } = request;
        Self { id, title, artist, genre, duration, times_ever_played }
    }
}
