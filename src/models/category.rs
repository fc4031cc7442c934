// src/models/category.rs

use serde::Serialize;
use sqlx::FromRow;

/// A category row. Ids are BIGSERIAL, generated by the store on insert.
///
/// Also serves as the category response shape (`{id, name}`), both standalone
/// and embedded inside product responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
  pub id: i64,
  pub name: String,
}
