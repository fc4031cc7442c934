// src/lib.rs

//! A small CRUD inventory service: categories and products over HTTP with JSON
//! bodies, backed by PostgreSQL.
//!
//! Per-request pipeline: boundary validation ([`dto`]) → service orchestration
//! and reference resolution ([`services`]) → persistence ([`repositories`]) →
//! response mapping, with failures translated to HTTP statuses by
//! [`errors::AppError`].

pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod web;

pub use errors::{AppError, Result};
pub use state::AppState;
