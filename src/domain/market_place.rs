use serde::{Deserialize, Serialize};

/// The tenant a news item belongs to and subscribers follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketPlace {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}
