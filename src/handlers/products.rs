use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::db::Repository;
use crate::error::ApiError;
use crate::handlers::list_page;
use crate::models::products::{Product, ProductInput};
use crate::query::ListQuery;

/// GET /api/products — search, filter, sort and paginate products.
/// Filters: category, status, minPrice, maxPrice, inStock.
pub async fn get_products(
    repo: web::Data<dyn Repository<Product>>,
    query: ListQuery,
) -> impl Responder {
    list_page(repo.get_ref(), &query, "products")
}

/// GET /api/products/{id} — a single product.
pub async fn get_product(
    repo: web::Data<dyn Repository<Product>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let product = repo
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Product {id}")))?;
    Ok(HttpResponse::Ok().json(product))
}

/// POST /api/products — validate and store a new product.
pub async fn create_product(
    repo: web::Data<dyn Repository<Product>>,
    body: web::Json<ProductInput>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate().inspect_err(|errors| {
        tracing::warn!(%errors, "rejected product create");
    })?;

    let product = repo.insert(input.into_product(Uuid::new_v4().to_string(), Utc::now()));
    tracing::info!(id = %product.id, name = %product.name, "product created");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "data": product,
    })))
}

/// PUT /api/products/{id} — replace a product's editable fields.
pub async fn update_product(
    repo: web::Data<dyn Repository<Product>>,
    path: web::Path<String>,
    body: web::Json<ProductInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate().inspect_err(|errors| {
        tracing::warn!(%id, %errors, "rejected product update");
    })?;

    let existing = repo
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Product {id}")))?;
    let updated = repo.update(input.apply_to(existing, Utc::now()))?;
    tracing::info!(%id, "product updated");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": updated,
    })))
}

/// DELETE /api/products/{id} — remove a product and return it.
pub async fn delete_product(
    repo: web::Data<dyn Repository<Product>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let deleted = repo
        .delete(&id)
        .map_err(|_| ApiError::NotFound(format!("Product {id}")))?;
    tracing::info!(%id, "product deleted");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": deleted,
    })))
}
