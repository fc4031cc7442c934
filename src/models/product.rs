// src/models/product.rs

use sqlx::FromRow;

/// A product read row, joined with its category's name so that responses can
/// embed the full `{id, name}` category without a second lookup.
///
/// Product reads INNER JOIN categories; a product whose category was deleted
/// out from under it simply stops appearing (no FK constraint is declared).
#[derive(Debug, Clone, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price: i32,
  pub stock: i32,
  pub category_id: i64,
  pub category_name: String,
}

/// A validated product write: what create and update persist.
///
/// Produced only by the request validation step, so fields here are already
/// within range and `category_id` is present (though not yet resolved).
#[derive(Debug, Clone)]
pub struct NewProduct {
  pub name: String,
  pub description: Option<String>,
  pub price: i32,
  pub stock: i32,
  pub category_id: i64,
}
