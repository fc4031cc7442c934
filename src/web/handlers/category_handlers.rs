// src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::dto::CategoryRequest;
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::create_category", skip(app_state, body))]
pub async fn create_category_handler(
  app_state: web::Data<AppState>,
  body: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
  let name = body.into_inner().validate().map_err(AppError::Validation)?;
  let category = app_state.categories.create(name).await?;
  Ok(HttpResponse::Created().json(category))
}

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = app_state.categories.get_all().await?;
  info!("Fetched {} categories.", categories.len());
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::get_category", skip(app_state, path), fields(category_id = *path.as_ref()))]
pub async fn get_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.categories.get_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::update_category", skip(app_state, path, body), fields(category_id = *path.as_ref()))]
pub async fn update_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
  let name = body.into_inner().validate().map_err(AppError::Validation)?;
  let category = app_state.categories.update(path.into_inner(), name).await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::delete_category", skip(app_state, path), fields(category_id = *path.as_ref()))]
pub async fn delete_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  app_state.categories.delete(path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
