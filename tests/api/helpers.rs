use std::net::TcpListener;
use std::sync::Arc;

use marketplace_news::{
    configuration::{DatabaseSettings, get_configuration},
    domain::{SubscribedUser, Subscription},
    repository::{InMemoryNewsRepository, InMemorySubscriptionRepository},
    routes::{AlertHeaders, NewsEndpoint},
    startup::run,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub alert_prefix: String,
    pub email_server: MockServer,
    pub news: Arc<InMemoryNewsRepository>,
    pub subscriptions: Arc<InMemorySubscriptionRepository>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn subscribe(&self, id: i64, market_place_id: i64, email: &str) {
        self.subscriptions
            .add(Subscription {
                id,
                id_market_place: market_place_id,
                user: SubscribedUser {
                    email: email.to_string(),
                },
            })
            .await;
    }

    pub async fn post_news(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/newss", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_news(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .put(format!("{}/api/newss", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_news_page(&self, query: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/newss{query}", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_news(&self, id: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/newss/{id}", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_news(&self, id: i64) -> reqwest::Response {
        self.api_client
            .delete(format!("{}/api/newss/{id}", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_market_place_news(&self, id: i64) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/marketPlaceNews/{id}", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn alert_header(&self, kind: &str) -> String {
        format!("X-{}-{kind}", self.alert_prefix)
    }
}

pub fn news_body(title: &str, content: &str, market_place_id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "content": content,
        "marketPlace": { "id": market_place_id, "name": name }
    })
}

pub fn header_value<'a>(response: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database");

    let connection_pool = PgPool::connect_with(config.with_db())
        .await
        .expect("Failed to connect to Postgres");

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate database");

    connection_pool
}

/// A freshly migrated database of its own, named after a random uuid.
pub async fn spawn_database() -> PgPool {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration");
    config.database.database_name = Uuid::new_v4().to_string();
    configure_database(&config.database).await
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration");
    config.email_client.base_url = email_server.uri();
    let email_client = config
        .email_client
        .client()
        .expect("Failed to build email client.");

    let news = Arc::new(InMemoryNewsRepository::new());
    let subscriptions = Arc::new(InMemorySubscriptionRepository::default());
    let endpoint = NewsEndpoint::new(
        news.clone(),
        subscriptions.clone(),
        Arc::new(email_client),
        AlertHeaders::new(config.application.name.clone()),
    );

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port.");
    let port = listener.local_addr().unwrap().port();
    let server = run(listener, endpoint).expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        alert_prefix: config.application.name,
        email_server,
        news,
        subscriptions,
        api_client: reqwest::Client::new(),
    }
}
