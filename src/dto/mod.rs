// src/dto/mod.rs

//! Request and response shapes for the HTTP boundary.
//!
//! Request fields are `Option`-typed so that missing or null JSON fields reach
//! the explicit `validate()` step (which reports every violated field at once)
//! instead of failing inside serde with an opaque deserialization error.

pub mod category;
pub mod product;

pub use category::CategoryRequest;
pub use product::{ProductRequest, ProductResponse};

use std::collections::BTreeMap;

/// Field-name-to-violation-message mapping, serialized verbatim as the 400 body.
pub type FieldErrors = BTreeMap<String, String>;
