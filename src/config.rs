use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    /// Key for the keyed hash over department access PINs
    pub department_pin_secret: String,
    pub cors_allowed_origin: Option<HeaderValue>,
    pub metrics_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        let department_pin_secret = env::var("DEPARTMENT_PIN_SECRET")
            .map_err(|_| "DEPARTMENT_PIN_SECRET must be set".to_string())?;

        if department_pin_secret.len() < 16 {
            return Err("DEPARTMENT_PIN_SECRET must be at least 16 characters".to_string());
        }

        let bind_addr = parse_bind_addr(env::var("BIND_ADDR").ok().as_deref())?;

        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("Invalid DB_MAX_CONNECTIONS: {}", raw))?,
            Err(_) => 10,
        };

        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| format!("Invalid CORS_ALLOWED_ORIGIN: {}", origin))
            })
            .transpose()?;

        let metrics_key = env::var("METRICS_KEY").ok().filter(|k| !k.is_empty());

        Ok(Self {
            database_url,
            bind_addr,
            db_max_connections,
            department_pin_secret,
            cors_allowed_origin,
            metrics_key,
        })
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<SocketAddr, String> {
    raw.unwrap_or("0.0.0.0:3000")
        .parse()
        .map_err(|_| format!("Invalid BIND_ADDR: {}", raw.unwrap_or_default()))
}
