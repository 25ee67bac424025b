use actix_web::{HttpResponse, web};

use super::{NewsEndpoint, NewsError};
use crate::domain::{News, PageQuery, PageRequest};

pub async fn create_news(
    body: web::Json<News>,
    endpoint: web::Data<NewsEndpoint>,
) -> Result<HttpResponse, NewsError> {
    endpoint.create(body.into_inner()).await
}

pub async fn update_news(
    body: web::Json<News>,
    endpoint: web::Data<NewsEndpoint>,
) -> Result<HttpResponse, NewsError> {
    endpoint.update(body.into_inner()).await
}

pub async fn list_news(
    query: web::Query<PageQuery>,
    endpoint: web::Data<NewsEndpoint>,
) -> Result<HttpResponse, NewsError> {
    let request = PageRequest::try_from(query.into_inner()).map_err(NewsError::ValidationError)?;
    endpoint.list_all(request).await
}

pub async fn get_news(
    id: web::Path<i64>,
    endpoint: web::Data<NewsEndpoint>,
) -> Result<HttpResponse, NewsError> {
    endpoint.get(id.into_inner()).await
}

pub async fn delete_news(
    id: web::Path<i64>,
    endpoint: web::Data<NewsEndpoint>,
) -> Result<HttpResponse, NewsError> {
    endpoint.delete(id.into_inner()).await
}

pub async fn list_market_place_news(
    id: web::Path<i64>,
    endpoint: web::Data<NewsEndpoint>,
) -> Result<HttpResponse, NewsError> {
    endpoint.list_by_market_place(id.into_inner()).await
}
