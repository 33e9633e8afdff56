use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Database {
    /// Load the sample catalogue on startup.
    #[educe(Default(expression = true))]
    pub seed: bool,
}
