use actix_web::{Responder, web};

use crate::db::Repository;
use crate::handlers::list_page;
use crate::models::users::User;
use crate::query::ListQuery;

/// GET /api/users — search, filter, sort and paginate users.
/// Filters: role, status.
pub async fn get_users(repo: web::Data<dyn Repository<User>>, query: ListQuery) -> impl Responder {
    list_page(repo.get_ref(), &query, "users")
}
