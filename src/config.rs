use std::{env, path::PathBuf};

use crate::services::pagination::DEFAULT_PAGE_SIZE;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const JWT_SECRET: &str = "default_secret";
const MONGODB_DATABASE: &str = "Hotels";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Bookings go to MongoDB when set, otherwise they live in memory.
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,
    /// Replaces the bundled property dataset.
    pub properties_path: Option<PathBuf>,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            jwt_secret: JWT_SECRET.to_string(),
            mongodb_uri: None,
            mongodb_database: MONGODB_DATABASE.to_string(),
            properties_path: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Read configuration from environment variables, using defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: non_empty("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            jwt_secret: non_empty("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            mongodb_uri: non_empty("MONGODB_URI"),
            mongodb_database: non_empty("MONGODB_DATABASE").unwrap_or(defaults.mongodb_database),
            properties_path: non_empty("PROPERTIES_PATH").map(PathBuf::from),
            page_size: non_empty("SEARCH_PAGE_SIZE")
                .and_then(|s| s.parse().ok())
                .filter(|size: &usize| *size > 0)
                .unwrap_or(defaults.page_size),
        }
    }
}
