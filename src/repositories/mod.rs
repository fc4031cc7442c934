// src/repositories/mod.rs

//! The persistence gateway: trait contracts consumed by the services, plus
//! their PostgreSQL implementations.
//!
//! The contracts are traits so that tests can wire the services and handlers
//! against in-memory implementations without a database.

pub mod category_repository;
pub mod product_repository;

pub use category_repository::{CategoryRepository, PgCategoryRepository};
pub use product_repository::{PgProductRepository, ProductRepository};
