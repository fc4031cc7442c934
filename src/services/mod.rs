// src/services/mod.rs

//! Domain services: orchestrate already-validated input into store mutations
//! and map persisted rows to response shapes.

pub mod category_service;
pub mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
