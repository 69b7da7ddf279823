pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;
