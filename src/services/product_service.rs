// src/services/product_service.rs

use std::sync::Arc;

use tracing::{info, instrument};

use crate::dto::ProductResponse;
use crate::errors::{AppError, Result};
use crate::models::{Category, NewProduct};
use crate::repositories::{CategoryRepository, ProductRepository};

/// Product CRUD plus the one referential rule in the system: a product must
/// reference an existing category, resolved at write time.
pub struct ProductService {
  products: Arc<dyn ProductRepository>,
  categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
  pub fn new(products: Arc<dyn ProductRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
    Self { products, categories }
  }

  #[instrument(name = "product_service::create", skip(self, input), fields(product_name = %input.name))]
  pub async fn create(&self, input: NewProduct) -> Result<ProductResponse> {
    // Resolve the category first: nothing is persisted if it is absent.
    let category = self.category_or_not_found(input.category_id).await?;
    let id = self.products.insert(&input).await?;
    info!(product_id = id, "Product created.");
    Ok(compose_response(id, input, category))
  }

  /// Returns all products, or only those whose category name exactly equals
  /// the filter (case-sensitive). A blank filter means no filter.
  #[instrument(name = "product_service::get_all", skip(self))]
  pub async fn get_all(&self, category_name: Option<&str>) -> Result<Vec<ProductResponse>> {
    let rows = match category_name {
      Some(name) if !name.trim().is_empty() => self.products.find_by_category_name(name).await?,
      _ => self.products.find_all().await?,
    };
    Ok(rows.into_iter().map(ProductResponse::from).collect())
  }

  #[instrument(name = "product_service::get_by_id", skip(self))]
  pub async fn get_by_id(&self, id: i64) -> Result<ProductResponse> {
    let row = self
      .products
      .find_by_id(id)
      .await?
      .ok_or_else(|| AppError::not_found("Product", id))?;
    Ok(ProductResponse::from(row))
  }

  /// Full replace: every field of the stored product is overwritten, and the
  /// new `category_id` is re-resolved just like on create.
  #[instrument(name = "product_service::update", skip(self, input))]
  pub async fn update(&self, id: i64, input: NewProduct) -> Result<ProductResponse> {
    if self.products.find_by_id(id).await?.is_none() {
      return Err(AppError::not_found("Product", id));
    }
    let category = self.category_or_not_found(input.category_id).await?;
    self.products.update(id, &input).await?;
    info!(product_id = id, "Product updated.");
    Ok(compose_response(id, input, category))
  }

  #[instrument(name = "product_service::delete", skip(self))]
  pub async fn delete(&self, id: i64) -> Result<()> {
    if self.products.find_by_id(id).await?.is_none() {
      return Err(AppError::not_found("Product", id));
    }
    self.products.delete(id).await?;
    info!(product_id = id, "Product deleted.");
    Ok(())
  }

  async fn category_or_not_found(&self, id: i64) -> Result<Category> {
    self
      .categories
      .find_by_id(id)
      .await?
      .ok_or_else(|| AppError::not_found("Category", id))
  }
}

fn compose_response(id: i64, input: NewProduct, category: Category) -> ProductResponse {
  ProductResponse {
    id,
    name: input.name,
    description: input.description,
    price: input.price,
    stock: input.stock,
    category,
  }
}
