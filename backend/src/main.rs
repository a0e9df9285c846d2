use actix_web::{web, App, HttpServer};
use backend::config::AppConfig;
use backend::{configure_app, db, storage};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();

    let conn = db::open(&config.db_path).map_err(std::io::Error::other)?;
    db::init_schema(&conn).map_err(std::io::Error::other)?;
    drop(conn);
    storage::Storage::new(&config.data_dir).ensure_layout()?;

    info!("Server running at http://{}:{}", config.host, config.port);

    let bind = (config.host.clone(), config.port);
    let data = web::Data::new(config);
    HttpServer::new(move || App::new().configure(|app| configure_app(app, data.clone())))
        .bind(bind)?
        .run()
        .await
}
