use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    #[serde(default)]
    #[cfg_attr(feature = "test", dummy(expr = "String::new()"))]
    pub id: String,
    pub user_id: String,
    pub song_id: String,
}
