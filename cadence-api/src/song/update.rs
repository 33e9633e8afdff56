use serde::{Deserialize, Serialize};

use super::Song;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub duration: Option<u32>,
    pub times_ever_played: Option<u32>,
}

impl Request {
    pub fn apply(self, song: &mut Song) {
        let Self { title, artist, genre, duration, times_ever_played } = self;
        if let Some(title) = title {
            song.title = title;
        }
        if let Some(artist) = artist {
            song.artist = artist;
        }
        if let Some(genre) = genre {
            song.genre = genre;
        }
        if let Some(duration) = duration {
            song.duration = duration;
        }
        if let Some(times_ever_played) = times_ever_played {
            song.times_ever_played = times_ever_played;
        }
    }
}
