// src/dto/product.rs

use serde::{Deserialize, Serialize};

use super::FieldErrors;
use crate::models::{Category, NewProduct, Product};

const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

/// Body of `POST /products` and `PUT /products/{id}` (full replace on update).
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<i32>,
  pub stock: Option<i32>,
  #[serde(rename = "categoryId")]
  pub category_id: Option<i64>,
}

impl ProductRequest {
  /// Checks every field and returns a validated write input, or the complete
  /// set of violation messages (all offending fields reported at once).
  pub fn validate(self) -> Result<NewProduct, FieldErrors> {
    let mut errors = FieldErrors::new();

    match &self.name {
      None => {
        errors.insert("name".to_string(), "Product name is required".to_string());
      }
      Some(name) if name.trim().is_empty() => {
        errors.insert("name".to_string(), "Product name is required".to_string());
      }
      Some(name) if name.chars().count() > MAX_NAME_LEN => {
        errors.insert(
          "name".to_string(),
          format!("Product name must be at most {} characters", MAX_NAME_LEN),
        );
      }
      Some(_) => {}
    }

    if let Some(description) = &self.description {
      if description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.insert(
          "description".to_string(),
          format!("Description must be at most {} characters", MAX_DESCRIPTION_LEN),
        );
      }
    }

    match self.price {
      None => {
        errors.insert("price".to_string(), "Price is required".to_string());
      }
      Some(price) if price < 0 => {
        errors.insert("price".to_string(), "Price must be >= 0".to_string());
      }
      Some(_) => {}
    }

    match self.stock {
      None => {
        errors.insert("stock".to_string(), "Stock is required".to_string());
      }
      Some(stock) if stock < 0 => {
        errors.insert("stock".to_string(), "Stock must be >= 0".to_string());
      }
      Some(_) => {}
    }

    if self.category_id.is_none() {
      errors.insert("categoryId".to_string(), "CategoryId is required".to_string());
    }

    if !errors.is_empty() {
      return Err(errors);
    }

    // All `None` cases were reported above.
    Ok(NewProduct {
      name: self.name.unwrap_or_default(),
      description: self.description,
      price: self.price.unwrap_or_default(),
      stock: self.stock.unwrap_or_default(),
      category_id: self.category_id.unwrap_or_default(),
    })
  }
}

/// Product response shape: always embeds the full category, never just its id.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price: i32,
  pub stock: i32,
  pub category: Category,
}

impl From<Product> for ProductResponse {
  fn from(row: Product) -> Self {
    ProductResponse {
      id: row.id,
      name: row.name,
      description: row.description,
      price: row.price,
      stock: row.stock,
      category: Category {
        id: row.category_id,
        name: row.category_name,
      },
    }
  }
}
