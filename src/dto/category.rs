// src/dto/category.rs

use serde::Deserialize;

use super::FieldErrors;

/// Body of `POST /categories` and `PUT /categories/{id}` (the shapes are
/// identical: a category is just a name).
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
  pub name: Option<String>,
}

impl CategoryRequest {
  /// Checks the request and returns the category name, or the per-field
  /// violation messages for the 400 response.
  pub fn validate(self) -> Result<String, FieldErrors> {
    match self.name {
      Some(name) if !name.trim().is_empty() => Ok(name),
      _ => {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), "Category name is required".to_string());
        Err(errors)
      }
    }
  }
}
