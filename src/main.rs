use actix_cors::Cors;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use dashboard_api::{AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let state = if config.seed_mock_data {
        AppState::seeded()
    } else {
        AppState::empty()
    };

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, seeded = config.seed_mock_data, "Server running");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let state = state.clone();
        App::new().wrap(cors).configure(move |cfg| state.configure(cfg))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
