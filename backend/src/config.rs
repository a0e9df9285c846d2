//! Process configuration, resolved once at startup.

use crate::docgen::fill::FillStrategy;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub data_dir: PathBuf,
    /// Fill strategy picked once here; handlers never re-probe it.
    pub fill_strategy: FillStrategy,
}

impl AppConfig {
    /// Reads `GATEDOCK_*` environment variables, with defaults suitable for
    /// a local run.
    pub fn from_env() -> Self {
        let host = env::var("GATEDOCK_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("GATEDOCK_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let db_path = env::var("GATEDOCK_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("gatedock.sqlite"));
        let data_dir = env::var("GATEDOCK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let fill_strategy = match env::var("GATEDOCK_FILL_STRATEGY").as_deref() {
            Ok("naive") => FillStrategy::NaiveReplace,
            _ => FillStrategy::Structured,
        };
        Self {
            host,
            port,
            db_path,
            data_dir,
            fill_strategy,
        }
    }
}
