// src/models/mod.rs

//! Data structures representing database rows and validated write inputs.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::{NewProduct, Product};
