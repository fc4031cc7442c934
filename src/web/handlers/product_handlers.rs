// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::dto::ProductRequest;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  /// Exact category name to filter by; absent or blank means no filter.
  pub category: Option<String>,
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
  let input = body.into_inner().validate().map_err(AppError::Validation)?;
  let product = app_state.products.create(input).await?;
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::list_products", skip(app_state, query))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.products.get_all(query.category.as_deref()).await?;
  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = *path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.products.get_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = *path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
  let input = body.into_inner().validate().map_err(AppError::Validation)?;
  let product = app_state.products.update(path.into_inner(), input).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = *path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  app_state.products.delete(path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
