// src/web/routes.rs

use actix_web::web;

use super::handlers::{category_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the test harness) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/categories")
        .route("", web::post().to(category_handlers::create_category_handler))
        .route("", web::get().to(category_handlers::list_categories_handler))
        .route("/{id}", web::get().to(category_handlers::get_category_handler))
        .route("/{id}", web::put().to(category_handlers::update_category_handler))
        .route("/{id}", web::delete().to(category_handlers::delete_category_handler)),
    )
    .service(
      web::scope("/products")
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("/{id}", web::get().to(product_handlers::get_product_handler))
        .route("/{id}", web::put().to(product_handlers::update_product_handler))
        .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
    );
}
