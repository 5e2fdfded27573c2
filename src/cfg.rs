use std::env;

const DEFAULT_DB_URL: &str = "snowmap.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
    pub enable_cors: bool,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        if let Ok(size) = env::var("DATABASE_CONNECTION_POOL_SIZE") {
            match size.parse() {
                Ok(size) => {
                    cfg.db_connection_pool_size = size;
                }
                Err(_) => {
                    log::warn!("Invalid DATABASE_CONNECTION_POOL_SIZE: {size}");
                }
            }
        }
        if let Ok(c) = env::var("ENABLE_CORS").map(|s| s.to_lowercase()) {
            cfg.enable_cors = c == "true" || c == "1" || c == "yes";
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            db_connection_pool_size: DB_CONNECTION_POOL_SIZE,
            enable_cors: false,
        }
    }
}
