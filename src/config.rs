// config.rs
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_file: String,
    pub ephemeral_storage: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "10000".to_string())
            .parse()
            .unwrap_or(10000);

        let data_file =
            env::var("DATA_FILE").unwrap_or_else(|_| "data/predictor.json".to_string());

        // "true" switches to the in-memory store, everything else keeps the file store
        let ephemeral_storage = env::var("EPHEMERAL_STORAGE")
            .map(|v| v == "true")
            .unwrap_or(false);

        AppConfig {
            host,
            port,
            data_file,
            ephemeral_storage,
        }
    }
}
