// src/state.rs

use std::sync::Arc;

use crate::services::{CategoryService, ProductService};

/// Shared application state handed to handlers via `web::Data`.
///
/// Wired explicitly at startup (or by the test harness over in-memory
/// repositories); there is no hidden registry.
#[derive(Clone)]
pub struct AppState {
  pub categories: Arc<CategoryService>,
  pub products: Arc<ProductService>,
}
