// src/repositories/category_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::errors::Result;
use crate::models::Category;

/// Store contract for categories. Ids are generated by the store on insert.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
  async fn insert(&self, name: &str) -> Result<Category>;
  async fn update(&self, category: &Category) -> Result<()>;
  async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;
  async fn find_all(&self) -> Result<Vec<Category>>;
  async fn delete(&self, category: &Category) -> Result<()>;
}

/// PostgreSQL-backed category store.
pub struct PgCategoryRepository {
  pool: PgPool,
}

impl PgCategoryRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
  #[instrument(name = "category_repo::insert", skip(self))]
  async fn insert(&self, name: &str) -> Result<Category> {
    let category: Category = sqlx::query_as("INSERT INTO categories (name) VALUES ($1) RETURNING id, name")
      .bind(name)
      .fetch_one(&self.pool)
      .await?;
    Ok(category)
  }

  #[instrument(name = "category_repo::update", skip(self, category), fields(category_id = category.id))]
  async fn update(&self, category: &Category) -> Result<()> {
    sqlx::query("UPDATE categories SET name = $1 WHERE id = $2")
      .bind(&category.name)
      .bind(category.id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  #[instrument(name = "category_repo::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
    let category: Option<Category> = sqlx::query_as("SELECT id, name FROM categories WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(category)
  }

  #[instrument(name = "category_repo::find_all", skip(self))]
  async fn find_all(&self) -> Result<Vec<Category>> {
    let categories: Vec<Category> = sqlx::query_as("SELECT id, name FROM categories ORDER BY id ASC")
      .fetch_all(&self.pool)
      .await?;
    Ok(categories)
  }

  #[instrument(name = "category_repo::delete", skip(self, category), fields(category_id = category.id))]
  async fn delete(&self, category: &Category) -> Result<()> {
    // No guard against products still referencing this category; orphaning is
    // permitted (products read through an INNER JOIN, so orphans go invisible).
    sqlx::query("DELETE FROM categories WHERE id = $1")
      .bind(category.id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }
}
