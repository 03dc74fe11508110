//! Web server: JSON API for players and matches, HTML page at `/`, static files from /static.
//! Run with: cargo run --bin web
//! Configured through HOST, PORT, DATABASE_URL and DATABASE_MAX_CONNECTIONS (see `Config`).

use actix_files::Files;
use actix_web::{web::Data, App, HttpServer};
use pingpong_tracker::{api, Config, Store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let store = Store::connect(&config.database_url, config.database_max_connections)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    log::info!("Using store at {}", config.database_url);

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let store = Data::new(store);
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(api::configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}
