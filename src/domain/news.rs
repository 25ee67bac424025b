use serde::{Deserialize, Serialize};

use super::MarketPlace;

/// A news item as it travels over the wire and out of the stores.
///
/// `id` is `None` only for items that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub market_place: MarketPlace,
}
