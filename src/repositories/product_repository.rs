// src/repositories/product_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::errors::Result;
use crate::models::{NewProduct, Product};

/// Store contract for products.
///
/// Reads return rows joined with the category name, so one call suffices to
/// build a response embedding the full category. Writes take a validated
/// [`NewProduct`] whose `category_id` the service has already resolved.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Persists a new product and returns its generated id.
  async fn insert(&self, product: &NewProduct) -> Result<i64>;
  /// Full replace of every mutable field.
  async fn update(&self, id: i64, product: &NewProduct) -> Result<()>;
  async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;
  async fn find_all(&self) -> Result<Vec<Product>>;
  /// Products whose category name exactly equals `name` (case-sensitive).
  async fn find_by_category_name(&self, name: &str) -> Result<Vec<Product>>;
  async fn delete(&self, id: i64) -> Result<()>;
}

const SELECT_PRODUCT: &str = "SELECT p.id, p.name, p.description, p.price, p.stock, \
       p.category_id, c.name AS category_name \
       FROM products p JOIN categories c ON c.id = p.category_id";

/// PostgreSQL-backed product store.
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  #[instrument(name = "product_repo::insert", skip(self, product), fields(product_name = %product.name))]
  async fn insert(&self, product: &NewProduct) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
      "INSERT INTO products (name, description, price, stock, category_id) \
       VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(product.category_id)
    .fetch_one(&self.pool)
    .await?;
    Ok(id)
  }

  #[instrument(name = "product_repo::update", skip(self, product))]
  async fn update(&self, id: i64, product: &NewProduct) -> Result<()> {
    sqlx::query(
      "UPDATE products SET name = $1, description = $2, price = $3, stock = $4, category_id = $5 \
       WHERE id = $6",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(product.category_id)
    .bind(id)
    .execute(&self.pool)
    .await?;
    Ok(())
  }

  #[instrument(name = "product_repo::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
    let product: Option<Product> = sqlx::query_as(&format!("{} WHERE p.id = $1", SELECT_PRODUCT))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(product)
  }

  #[instrument(name = "product_repo::find_all", skip(self))]
  async fn find_all(&self) -> Result<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(&format!("{} ORDER BY p.id ASC", SELECT_PRODUCT))
      .fetch_all(&self.pool)
      .await?;
    Ok(products)
  }

  #[instrument(name = "product_repo::find_by_category_name", skip(self))]
  async fn find_by_category_name(&self, name: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(&format!("{} WHERE c.name = $1 ORDER BY p.id ASC", SELECT_PRODUCT))
      .bind(name)
      .fetch_all(&self.pool)
      .await?;
    Ok(products)
  }

  #[instrument(name = "product_repo::delete", skip(self))]
  async fn delete(&self, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }
}
