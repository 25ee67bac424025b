use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{NewsRepository, SubscriptionRepository};
use crate::domain::{NewNews, News, Page, PageRequest, Subscription};

#[derive(Default)]
struct NewsTable {
    last_id: i64,
    rows: BTreeMap<i64, News>,
}

/// Process-local news store. Identifiers start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryNewsRepository {
    table: RwLock<NewsTable>,
}

impl InMemoryNewsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn insert(&self, news: &NewNews) -> Result<News, anyhow::Error> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        let stored = news.clone().into_news(id);
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, news: &NewNews) -> Result<Option<News>, anyhow::Error> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = news.clone().into_news(id);
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<News>, anyhow::Error> {
        let table = self.table.read().await;
        let content = table
            .rows
            .values()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .cloned()
            .collect();

        Ok(Page {
            content,
            total: table.rows.len() as i64,
            request: *request,
        })
    }

    async fn find_all(&self) -> Result<Vec<News>, anyhow::Error> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_one(&self, id: i64) -> Result<Option<News>, anyhow::Error> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), anyhow::Error> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySubscriptionRepository {
    rows: RwLock<Vec<Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new(subscriptions: Vec<Subscription>) -> Self {
        Self {
            rows: RwLock::new(subscriptions),
        }
    }

    pub async fn add(&self, subscription: Subscription) {
        self.rows.write().await.push(subscription);
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn find_all(&self) -> Result<Vec<Subscription>, anyhow::Error> {
        Ok(self.rows.read().await.clone())
    }
}
