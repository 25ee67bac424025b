use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use crate::configuration::{DatabaseSettings, Settings};
use crate::repository::{
    InMemoryNewsRepository, InMemorySubscriptionRepository, NewsRepository, PgNewsRepository,
    PgSubscriptionRepository, SubscriptionRepository,
};
use crate::routes::{
    AlertHeaders, NewsEndpoint, create_news, delete_news, get_news, health_check,
    list_market_place_news, list_news, update_news,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = config.email_client.client()?;

        let (news, subscriptions): (Arc<dyn NewsRepository>, Arc<dyn SubscriptionRepository>) =
            if config.database.in_memory {
                tracing::warn!("Serving news from process memory, nothing will be persisted.");
                (
                    Arc::new(InMemoryNewsRepository::new()),
                    Arc::new(InMemorySubscriptionRepository::default()),
                )
            } else {
                let connection_pool = get_connection_pool(&config.database);
                sqlx::migrate!("./migrations")
                    .run(&connection_pool)
                    .await
                    .context("Failed to migrate the database.")?;
                (
                    Arc::new(PgNewsRepository::new(connection_pool.clone())),
                    Arc::new(PgSubscriptionRepository::new(connection_pool)),
                )
            };

        let endpoint = NewsEndpoint::new(
            news,
            subscriptions,
            Arc::new(email_client),
            AlertHeaders::new(config.application.name),
        );

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, endpoint)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, endpoint: NewsEndpoint) -> Result<Server, anyhow::Error> {
    let endpoint = web::Data::new(endpoint);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/newss", web::post().to(create_news))
                    .route("/newss", web::put().to(update_news))
                    .route("/newss", web::get().to(list_news))
                    .route("/newss/{id}", web::get().to(get_news))
                    .route("/newss/{id}", web::delete().to(delete_news))
                    .route("/marketPlaceNews/{id}", web::get().to(list_market_place_news)),
            )
            .app_data(endpoint.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_connection_pool(db_config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(db_config.with_db())
}
