use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use super::{NewsRepository, SubscriptionRepository};
use crate::domain::{
    MarketPlace, NewNews, News, Page, PageRequest, SubscribedUser, Subscription,
};

#[derive(sqlx::FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    content: String,
    market_place_id: i64,
    market_place_name: String,
}

impl From<NewsRow> for News {
    fn from(row: NewsRow) -> Self {
        News {
            id: Some(row.id),
            title: row.title,
            content: row.content,
            market_place: MarketPlace {
                id: row.market_place_id,
                name: row.market_place_name,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
struct SubscriptionRow {
    id: i64,
    id_market_place: i64,
    email: String,
}

#[derive(Clone)]
pub struct PgNewsRepository {
    pool: PgPool,
}

impl PgNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    #[tracing::instrument(name = "Saving new news in the database", skip_all)]
    async fn insert(&self, news: &NewNews) -> Result<News, anyhow::Error> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            WITH inserted AS (
                INSERT INTO news (title, content, market_place_id)
                VALUES ($1, $2, $3)
                RETURNING id, title, content, market_place_id
            )
            SELECT i.id, i.title, i.content, i.market_place_id, m.name AS market_place_name
            FROM inserted i
            JOIN market_places m ON m.id = i.market_place_id
            "#,
        )
        .bind(news.title.as_ref())
        .bind(&news.content)
        .bind(news.market_place.id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert news in the database.")?;

        Ok(row.into())
    }

    #[tracing::instrument(name = "Updating news in the database", skip(self, news))]
    async fn update(&self, id: i64, news: &NewNews) -> Result<Option<News>, anyhow::Error> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            WITH updated AS (
                UPDATE news
                SET title = $2, content = $3, market_place_id = $4
                WHERE id = $1
                RETURNING id, title, content, market_place_id
            )
            SELECT u.id, u.title, u.content, u.market_place_id, m.name AS market_place_name
            FROM updated u
            JOIN market_places m ON m.id = u.market_place_id
            "#,
        )
        .bind(id)
        .bind(news.title.as_ref())
        .bind(&news.content)
        .bind(news.market_place.id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update news in the database.")?;

        Ok(row.map(News::from))
    }

    #[tracing::instrument(name = "Reading a page of news", skip(self))]
    async fn find_page(&self, request: &PageRequest) -> Result<Page<News>, anyhow::Error> {
        let rows = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT n.id, n.title, n.content, n.market_place_id, m.name AS market_place_name
            FROM news n
            JOIN market_places m ON m.id = n.market_place_id
            ORDER BY n.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .context("Failed to read a page of news.")?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count news.")?;

        Ok(Page {
            content: rows.into_iter().map(News::from).collect(),
            total,
            request: *request,
        })
    }

    #[tracing::instrument(name = "Reading all news", skip(self))]
    async fn find_all(&self) -> Result<Vec<News>, anyhow::Error> {
        let rows = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT n.id, n.title, n.content, n.market_place_id, m.name AS market_place_name
            FROM news n
            JOIN market_places m ON m.id = n.market_place_id
            ORDER BY n.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to read news.")?;

        Ok(rows.into_iter().map(News::from).collect())
    }

    #[tracing::instrument(name = "Reading news by id", skip(self))]
    async fn find_one(&self, id: i64) -> Result<Option<News>, anyhow::Error> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT n.id, n.title, n.content, n.market_place_id, m.name AS market_place_name
            FROM news n
            JOIN market_places m ON m.id = n.market_place_id
            WHERE n.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to read news by id.")?;

        Ok(row.map(News::from))
    }

    #[tracing::instrument(name = "Deleting news from the database", skip(self))]
    async fn delete(&self, id: i64) -> Result<(), anyhow::Error> {
        sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete news.")?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgSubscriptionRepository {
    pool: PgPool,
}

impl PgSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    #[tracing::instrument(name = "Reading all subscriptions", skip(self))]
    async fn find_all(&self) -> Result<Vec<Subscription>, anyhow::Error> {
        let rows = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            SELECT s.id, s.id_market_place, u.email
            FROM subscriptions s
            JOIN users u ON u.id = s.user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to read subscriptions.")?;

        Ok(rows
            .into_iter()
            .map(|r| Subscription {
                id: r.id,
                id_market_place: r.id_market_place,
                user: SubscribedUser { email: r.email },
            })
            .collect())
    }
}
