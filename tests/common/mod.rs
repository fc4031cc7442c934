// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::collections::BTreeMap;
use std::sync::{
  atomic::{AtomicI64, Ordering},
  Arc,
};

use async_trait::async_trait;
use parking_lot::RwLock;

use inventory_service::errors::Result;
use inventory_service::models::{Category, NewProduct, Product};
use inventory_service::repositories::{CategoryRepository, ProductRepository};
use inventory_service::services::{CategoryService, ProductService};
use inventory_service::state::AppState;

// --- In-memory persistence gateway ---
//
// Stand-ins for the PostgreSQL repositories so the full actix app can be
// exercised without a database. Ids are generated from a counter, mirroring
// BIGSERIAL; product reads join against the category map the way the SQL
// implementation joins against the categories table.

#[derive(Default)]
pub struct InMemoryCategoryRepository {
  rows: RwLock<BTreeMap<i64, Category>>,
  next_id: AtomicI64,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
  async fn insert(&self, name: &str) -> Result<Category> {
    let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let category = Category {
      id,
      name: name.to_string(),
    };
    self.rows.write().insert(id, category.clone());
    Ok(category)
  }

  async fn update(&self, category: &Category) -> Result<()> {
    self.rows.write().insert(category.id, category.clone());
    Ok(())
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
    Ok(self.rows.read().get(&id).cloned())
  }

  async fn find_all(&self) -> Result<Vec<Category>> {
    Ok(self.rows.read().values().cloned().collect())
  }

  async fn delete(&self, category: &Category) -> Result<()> {
    self.rows.write().remove(&category.id);
    Ok(())
  }
}

pub struct InMemoryProductRepository {
  rows: RwLock<BTreeMap<i64, NewProduct>>,
  next_id: AtomicI64,
  categories: Arc<InMemoryCategoryRepository>,
}

impl InMemoryProductRepository {
  pub fn new(categories: Arc<InMemoryCategoryRepository>) -> Self {
    Self {
      rows: RwLock::new(BTreeMap::new()),
      next_id: AtomicI64::new(0),
      categories,
    }
  }

  /// Joins a stored product with its category, like the SQL INNER JOIN:
  /// products whose category is gone produce no row.
  fn to_row(&self, id: i64, stored: &NewProduct) -> Option<Product> {
    let categories = self.categories.rows.read();
    let category = categories.get(&stored.category_id)?;
    Some(Product {
      id,
      name: stored.name.clone(),
      description: stored.description.clone(),
      price: stored.price,
      stock: stored.stock,
      category_id: category.id,
      category_name: category.name.clone(),
    })
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn insert(&self, product: &NewProduct) -> Result<i64> {
    let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    self.rows.write().insert(id, product.clone());
    Ok(id)
  }

  async fn update(&self, id: i64, product: &NewProduct) -> Result<()> {
    self.rows.write().insert(id, product.clone());
    Ok(())
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
    let rows = self.rows.read();
    Ok(rows.get(&id).and_then(|stored| self.to_row(id, stored)))
  }

  async fn find_all(&self) -> Result<Vec<Product>> {
    let rows = self.rows.read();
    Ok(
      rows
        .iter()
        .filter_map(|(id, stored)| self.to_row(*id, stored))
        .collect(),
    )
  }

  async fn find_by_category_name(&self, name: &str) -> Result<Vec<Product>> {
    // Exact, case-sensitive match on the joined category name.
    let all = self.find_all().await?;
    Ok(all.into_iter().filter(|row| row.category_name == name).collect())
  }

  async fn delete(&self, id: i64) -> Result<()> {
    self.rows.write().remove(&id);
    Ok(())
  }
}

// --- App wiring for tests ---

/// Builds an `AppState` over fresh in-memory repositories, wired exactly as
/// `main.rs` wires the PostgreSQL ones. Clones of the returned state share the
/// same stores, so tests can seed through the services and then serve requests
/// through the actix app.
pub fn test_state() -> AppState {
  let category_repository = Arc::new(InMemoryCategoryRepository::default());
  let product_repository = Arc::new(InMemoryProductRepository::new(category_repository.clone()));
  AppState {
    categories: Arc::new(CategoryService::new(category_repository.clone())),
    products: Arc::new(ProductService::new(product_repository, category_repository)),
  }
}

/// Seeds a category through the service layer, returning its generated id.
pub async fn seed_category(state: &AppState, name: &str) -> i64 {
  state
    .categories
    .create(name.to_string())
    .await
    .expect("seeding category should succeed")
    .id
}

/// Seeds a product through the service layer, returning its generated id.
pub async fn seed_product(state: &AppState, name: &str, description: &str, price: i32, stock: i32, category_id: i64) -> i64 {
  state
    .products
    .create(NewProduct {
      name: name.to_string(),
      description: Some(description.to_string()),
      price,
      stock,
      category_id,
    })
    .await
    .expect("seeding product should succeed")
    .id
}
