use actix_web::{web, App, HttpServer, middleware::Logger};
use actix_cors::Cors;
use dotenv::dotenv;

use chama_notify::config::Config;
use chama_notify::handlers;
use chama_notify::services::registry::NotificationRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().expect("Failed to load configuration");
    let registry = NotificationRegistry::with_demo_data();

    let bind_address = format!("0.0.0.0:{}", config.server.port);
    let client_url = config.server.client_url.clone();

    log::info!("Starting chama notification API on {}", bind_address);
    log::info!("Allowed client origin: {}", client_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allowed_origin(&client_url)
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .app_data(web::Data::new(registry.clone()))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/notifications")
                            .service(handlers::notification::list_notifications)
                            .service(handlers::notification::mark_all_read)
                            .service(handlers::notification::mark_read)
                            .service(handlers::notification::delete_notification)
                            .service(handlers::notification::create_notification),
                    )
                    .route("/health", web::get().to(handlers::health::health_check)),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
