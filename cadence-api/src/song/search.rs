use serde::{Deserialize, Serialize};

use super::Song;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub keyword: String,
    /// Genre substring, applied on top of the keyword match.
    pub filter: Option<String>,
}

impl Request {
    pub fn matches(&self, song: &Song) -> bool {
        let keyword = self.keyword.to_lowercase();
        let keyword_match = song.title.to_lowercase().contains(&keyword)
            || song.artist.to_lowercase().contains(&keyword);
        keyword_match
            && self
                .filter
                .as_deref()
                .is_none_or(|filter| song.genre.to_lowercase().contains(&filter.to_lowercase()))
    }
}
