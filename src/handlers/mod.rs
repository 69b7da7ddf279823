pub mod auth;
pub mod orders;
pub mod products;
pub mod users;
pub mod waitlist;

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;

use crate::db::Repository;
use crate::query::{ListQuery, Listable, resolve};

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));

    // ── Product routes ──
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(products::get_products))
            .route("", web::post().to(products::create_product))
            .route("/create", web::post().to(products::create_product))
            .route("/{id}", web::get().to(products::get_product))
            .route("/{id}", web::put().to(products::update_product))
            .route("/{id}", web::delete().to(products::delete_product)),
    );

    // ── User routes (read-only) ──
    cfg.service(web::resource("/users").route(web::get().to(users::get_users)));

    // ── Order routes (read-only) ──
    cfg.service(web::resource("/orders").route(web::get().to(orders::get_orders)));

    // ── Sign-up and sign-in ──
    cfg.service(web::resource("/waitlist").route(web::post().to(waitlist::join_waitlist)));
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(auth::register))
            .route("/login", web::post().to(auth::login)),
    );
}

/// GET /api/health
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Resolve `query` against a snapshot of `repo` and render the page envelope.
pub(crate) fn list_page<T>(repo: &dyn Repository<T>, query: &ListQuery, resource: &str) -> HttpResponse
where
    T: Listable + Serialize,
{
    let page = resolve(&repo.list(), query);
    tracing::debug!(
        resource,
        total = page.total,
        page = page.page,
        limit = page.limit,
        returned = page.data.len(),
        "resolved list query"
    );
    HttpResponse::Ok().json(page)
}
