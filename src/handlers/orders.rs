use actix_web::{Responder, web};

use crate::db::Repository;
use crate::handlers::list_page;
use crate::models::orders::Order;
use crate::query::ListQuery;

/// GET /api/orders — search, filter, sort and paginate orders.
/// Filters: status, payment_method, minAmount, maxAmount.
pub async fn get_orders(
    repo: web::Data<dyn Repository<Order>>,
    query: ListQuery,
) -> impl Responder {
    list_page(repo.get_ref(), &query, "orders")
}
