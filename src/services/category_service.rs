// src/services/category_service.rs

use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::{AppError, Result};
use crate::models::Category;
use crate::repositories::CategoryRepository;

/// Category CRUD over the persistence gateway.
///
/// Input reaching this service has already passed boundary validation; the
/// only failure this service raises itself is NotFound. There is deliberately
/// no uniqueness check on category names.
pub struct CategoryService {
  repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
  pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
    Self { repository }
  }

  #[instrument(name = "category_service::create", skip(self))]
  pub async fn create(&self, name: String) -> Result<Category> {
    let category = self.repository.insert(&name).await?;
    info!(category_id = category.id, "Category created.");
    Ok(category)
  }

  #[instrument(name = "category_service::get_all", skip(self))]
  pub async fn get_all(&self) -> Result<Vec<Category>> {
    self.repository.find_all().await
  }

  #[instrument(name = "category_service::get_by_id", skip(self))]
  pub async fn get_by_id(&self, id: i64) -> Result<Category> {
    self.get_or_not_found(id).await
  }

  #[instrument(name = "category_service::update", skip(self, name))]
  pub async fn update(&self, id: i64, name: String) -> Result<Category> {
    let mut category = self.get_or_not_found(id).await?;
    category.name = name;
    self.repository.update(&category).await?;
    info!(category_id = id, "Category updated.");
    Ok(category)
  }

  #[instrument(name = "category_service::delete", skip(self))]
  pub async fn delete(&self, id: i64) -> Result<()> {
    let category = self.get_or_not_found(id).await?;
    self.repository.delete(&category).await?;
    info!(category_id = id, "Category deleted.");
    Ok(())
  }

  async fn get_or_not_found(&self, id: i64) -> Result<Category> {
    self
      .repository
      .find_by_id(id)
      .await?
      .ok_or_else(|| AppError::not_found("Category", id))
  }
}
