#[derive(Debug, Clone)]
pub struct SubscribedUser {
    pub email: String,
}

/// Links a user to the market place whose news they want to receive.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: i64,
    pub id_market_place: i64,
    pub user: SubscribedUser,
}

impl Subscription {
    pub fn targets(&self, market_place_id: i64) -> bool {
        self.id_market_place == market_place_id
    }
}
