use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Feed {
    #[educe(Default(expression = 10))]
    pub hot_limit: usize,
    #[educe(Default(expression = 10))]
    pub recommendation_limit: usize,
}
