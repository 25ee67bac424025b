use std::sync::Arc;

use actix_web::{HttpResponse, http::header::LOCATION};
use anyhow::Context;

use super::{
    NewsError,
    helpers::{notification_content, notification_subject},
};
use crate::{
    domain::{NewNews, News, PageRequest, SubscriberEmail},
    email_client::Mailer,
    repository::{NewsRepository, SubscriptionRepository},
    routes::{AlertHeaders, helpers::insert_headers, pagination_headers},
};

const ENTITY_NAME: &str = "news";
const RESOURCE_PATH: &str = "/api/newss";

/// Maps the news HTTP operations onto the news store, and notifies the
/// subscribers of a market place whenever news is created for it.
pub struct NewsEndpoint {
    news: Arc<dyn NewsRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    mailer: Arc<dyn Mailer>,
    alerts: AlertHeaders,
}

impl NewsEndpoint {
    pub fn new(
        news: Arc<dyn NewsRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        mailer: Arc<dyn Mailer>,
        alerts: AlertHeaders,
    ) -> Self {
        Self {
            news,
            subscriptions,
            mailer,
            alerts,
        }
    }

    /// Emails are sent after the save and are not rolled back with it: a mail
    /// failure answers 500 while the news stays stored.
    #[tracing::instrument(
        name = "Creating news",
        skip(self, news),
        fields(news_title = %news.title, market_place_id = news.market_place.id)
    )]
    pub async fn create(&self, news: News) -> Result<HttpResponse, NewsError> {
        if news.id.is_some() {
            tracing::warn!("Rejecting new news that already carries an id");
            return Ok(insert_headers(
                &mut HttpResponse::BadRequest(),
                self.alerts.failure(ENTITY_NAME, "idexists"),
            )
            .finish());
        }

        let new_news: NewNews = news.try_into().map_err(NewsError::ValidationError)?;
        let saved = self
            .news
            .insert(&new_news)
            .await
            .context("Failed to save news.")?;
        let id = saved
            .id
            .context("The news store returned news without an identifier.")?;

        self.notify_subscribers(&saved).await?;

        Ok(insert_headers(
            &mut HttpResponse::Created(),
            self.alerts.entity_creation(ENTITY_NAME, &id.to_string()),
        )
        .insert_header((LOCATION, format!("{RESOURCE_PATH}/{id}")))
        .json(saved))
    }

    /// News without an id is handed to [`NewsEndpoint::create`].
    // TODO: decide with the web client whether a PUT without id should be a 400 instead.
    #[tracing::instrument(name = "Updating news", skip(self, news), fields(news_id = ?news.id))]
    pub async fn update(&self, news: News) -> Result<HttpResponse, NewsError> {
        let Some(id) = news.id else {
            return self.create(news).await;
        };

        let new_news: NewNews = news.try_into().map_err(NewsError::ValidationError)?;
        let updated = self
            .news
            .update(id, &new_news)
            .await
            .context("Failed to update news.")?;

        match updated {
            Some(saved) => Ok(insert_headers(
                &mut HttpResponse::Ok(),
                self.alerts.entity_update(ENTITY_NAME, &id.to_string()),
            )
            .json(saved)),
            None => Ok(HttpResponse::NotFound().finish()),
        }
    }

    #[tracing::instrument(name = "Listing a page of news", skip(self))]
    pub async fn list_all(&self, request: PageRequest) -> Result<HttpResponse, NewsError> {
        let page = self
            .news
            .find_page(&request)
            .await
            .context("Failed to read a page of news.")?;

        Ok(
            insert_headers(&mut HttpResponse::Ok(), pagination_headers(&page, RESOURCE_PATH))
                .json(page.content),
        )
    }

    #[tracing::instrument(name = "Getting news", skip(self))]
    pub async fn get(&self, id: i64) -> Result<HttpResponse, NewsError> {
        let news = self
            .news
            .find_one(id)
            .await
            .context("Failed to read news.")?;

        Ok(match news {
            Some(news) => HttpResponse::Ok().json(news),
            None => HttpResponse::NotFound().finish(),
        })
    }

    /// Succeeds whether or not `id` was stored.
    #[tracing::instrument(name = "Deleting news", skip(self))]
    pub async fn delete(&self, id: i64) -> Result<HttpResponse, NewsError> {
        self.news
            .delete(id)
            .await
            .context("Failed to delete news.")?;

        Ok(insert_headers(
            &mut HttpResponse::Ok(),
            self.alerts.entity_deletion(ENTITY_NAME, &id.to_string()),
        )
        .finish())
    }

    #[tracing::instrument(name = "Listing news of a market place", skip(self))]
    pub async fn list_by_market_place(
        &self,
        market_place_id: i64,
    ) -> Result<HttpResponse, NewsError> {
        let news: Vec<News> = self
            .news
            .find_all()
            .await
            .context("Failed to read news.")?
            .into_iter()
            .filter(|n| n.market_place.id == market_place_id)
            .collect();

        Ok(HttpResponse::Ok().json(news))
    }

    #[tracing::instrument(name = "Notifying market place subscribers", skip_all)]
    async fn notify_subscribers(&self, news: &News) -> Result<(), anyhow::Error> {
        let subscriptions = self
            .subscriptions
            .find_all()
            .await
            .context("Failed to read subscriptions.")?;

        let subject = notification_subject(&news.market_place.name);
        let content = notification_content(&news.title, &news.content);

        for subscription in subscriptions
            .iter()
            .filter(|s| s.targets(news.market_place.id))
        {
            let recipient = match SubscriberEmail::parse(subscription.user.email.clone()) {
                Ok(recipient) => recipient,
                Err(err) => {
                    tracing::warn!(
                        err.cause_chain = ?err,
                        subscription_id = subscription.id,
                        "Skipping the subscription. The stored user email is invalid."
                    );
                    continue;
                }
            };

            self.mailer
                .send_email(&recipient, &subject, &content, false, false)
                .await
                .with_context(|| {
                    format!("Failed to send news notification to {}", recipient.as_ref())
                })?;
        }

        Ok(())
    }
}
