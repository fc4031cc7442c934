// src/web/handlers/mod.rs

pub mod category_handlers;
pub mod product_handlers;
