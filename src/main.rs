use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use tracing::info;

use snaplink::config::Config;
use snaplink::services::{api_routes, redirect_routes};
use snaplink::storages::StorageFactory;
use snaplink::system::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    init_logging();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let storage = StorageFactory::create().map_err(std::io::Error::other)?;
    info!("Using storage backend: {}", storage.backend_name().await);

    let bind_address = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(config.clone()))
            .service(api_routes())
            .service(redirect_routes())
    })
    .bind(bind_address)?
    .run()
    .await
}
