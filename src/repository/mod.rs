//! Storage seams for news and subscriptions.
//!
//! The endpoint only sees these traits; `postgres` backs them with `sqlx`
//! and `memory` keeps everything in process.
mod memory;
mod postgres;

use async_trait::async_trait;

use crate::domain::{NewNews, News, Page, PageRequest, Subscription};

pub use memory::{InMemoryNewsRepository, InMemorySubscriptionRepository};
pub use postgres::{PgNewsRepository, PgSubscriptionRepository};

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Stores a new item and returns it with its assigned identifier.
    async fn insert(&self, news: &NewNews) -> Result<News, anyhow::Error>;

    /// Overwrites the item stored under `id`, `None` when there is none.
    async fn update(&self, id: i64, news: &NewNews) -> Result<Option<News>, anyhow::Error>;

    async fn find_page(&self, request: &PageRequest) -> Result<Page<News>, anyhow::Error>;

    async fn find_all(&self) -> Result<Vec<News>, anyhow::Error>;

    async fn find_one(&self, id: i64) -> Result<Option<News>, anyhow::Error>;

    /// Removes the item if present. Deleting a missing id is not an error.
    async fn delete(&self, id: i64) -> Result<(), anyhow::Error>;
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Subscription>, anyhow::Error>;
}
