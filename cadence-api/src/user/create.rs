use serde::{Deserialize, Serialize};

fn default_history_tracking() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    #[serde(default)]
    #[cfg_attr(feature = "test", dummy(expr = "String::new()"))]
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "test", dummy(faker = "fake::faker::internet::en::SafeEmail()"))]
    pub email: String,
    pub password: String,
    #[serde(default = "default_history_tracking")]
    #[cfg_attr(feature = "test", dummy(expr = "true"))]
    pub history_tracking: bool,
}
