use std::sync::Arc;

use actix_web::web;

use crate::db::{MemoryRepository, Repository, seed};
use crate::error::json_error_handler;
use crate::handlers;
use crate::models::auth::Account;
use crate::models::orders::Order;
use crate::models::products::Product;
use crate::models::users::User;
use crate::models::waitlist::WaitlistEntry;

/// The resource stores, shared across workers.
#[derive(Clone)]
pub struct AppState {
    pub products: web::Data<dyn Repository<Product>>,
    pub users: web::Data<dyn Repository<User>>,
    pub orders: web::Data<dyn Repository<Order>>,
    pub accounts: web::Data<dyn Repository<Account>>,
    pub waitlist: web::Data<dyn Repository<WaitlistEntry>>,
}

impl AppState {
    pub fn new(
        products: Arc<dyn Repository<Product>>,
        users: Arc<dyn Repository<User>>,
        orders: Arc<dyn Repository<Order>>,
        accounts: Arc<dyn Repository<Account>>,
        waitlist: Arc<dyn Repository<WaitlistEntry>>,
    ) -> Self {
        Self {
            products: web::Data::from(products),
            users: web::Data::from(users),
            orders: web::Data::from(orders),
            accounts: web::Data::from(accounts),
            waitlist: web::Data::from(waitlist),
        }
    }

    /// In-memory stores holding the mock data set.
    pub fn seeded() -> Self {
        let users = seed::users();
        let orders = seed::orders(&users);
        Self::new(
            Arc::new(MemoryRepository::new(seed::products())),
            Arc::new(MemoryRepository::new(users)),
            Arc::new(MemoryRepository::new(orders)),
            Arc::new(MemoryRepository::new(seed::accounts())),
            Arc::new(MemoryRepository::<WaitlistEntry>::default()),
        )
    }

    /// Empty resource stores. The sign-in accounts are always present.
    pub fn empty() -> Self {
        Self::new(
            Arc::new(MemoryRepository::<Product>::default()),
            Arc::new(MemoryRepository::<User>::default()),
            Arc::new(MemoryRepository::<Order>::default()),
            Arc::new(MemoryRepository::new(seed::accounts())),
            Arc::new(MemoryRepository::<WaitlistEntry>::default()),
        )
    }

    /// Register the stores and mount every route under `/api`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.products.clone())
            .app_data(self.users.clone())
            .app_data(self.orders.clone())
            .app_data(self.accounts.clone())
            .app_data(self.waitlist.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(web::scope("/api").configure(handlers::init_routes));
    }
}
