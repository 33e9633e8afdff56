pub mod create;
pub mod most_played;
pub mod statistics;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One recorded play of a song by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub id: String,
    pub user_id: String,
    pub song_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub played_at: OffsetDateTime,
}
