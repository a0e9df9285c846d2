pub mod config;
pub mod db;
pub mod docgen;
pub mod services;
pub mod storage;

use actix_web::web;

/// Registers every service on an actix application. Shared between `main`
/// and the HTTP tests.
pub fn configure_app(app: &mut web::ServiceConfig, config: web::Data<config::AppConfig>) {
    app.app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
        .app_data(config)
        .service(services::streams::configure_routes())
        .service(services::templates::configure_routes())
        .service(services::documents::configure_routes())
        .service(services::viewer::static_routes())
        .service(services::viewer::configure_routes());
}
