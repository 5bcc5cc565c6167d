use std::{env, time::Duration};

const DEV_JWT_SECRET: &str = "your-secret-key-change-this-in-production";
const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            idle_timeout: Duration::from_millis(30_000),
            connect_timeout: Duration::from_millis(2_000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
    /// External command run after each checkout with the total as its only argument.
    pub checkout_hook: Option<String>,
    pub pool: PoolConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => database_url_from_parts()?,
        };
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .or_else(|_| env::var("APP_PORT"))
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3001);

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let bcrypt_cost = parse_or("BCRYPT_COST", DEFAULT_BCRYPT_COST);
        let checkout_hook = env::var("CHECKOUT_HOOK").ok().filter(|c| !c.trim().is_empty());

        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            max_connections: parse_or("DB_MAX_CONNECTIONS", defaults.max_connections),
            idle_timeout: Duration::from_millis(parse_or(
                "DB_IDLE_TIMEOUT_MS",
                defaults.idle_timeout.as_millis() as u64,
            )),
            connect_timeout: Duration::from_millis(parse_or(
                "DB_CONNECT_TIMEOUT_MS",
                defaults.connect_timeout.as_millis() as u64,
            )),
        };

        Ok(Self {
            port,
            database_url,
            host,
            jwt_secret,
            bcrypt_cost,
            checkout_hook,
            pool,
        })
    }
}

fn database_url_from_parts() -> anyhow::Result<String> {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let name = env::var("DB_NAME").unwrap_or_else(|_| "myhousemaker".to_string());
    let user = env::var("DB_USER").unwrap_or_else(|_| "appadmin".to_string());
    let password = env::var("DB_PASSWORD").map_err(|_| {
        anyhow::anyhow!("DB_PASSWORD environment variable is required when DATABASE_URL is not set")
    })?;
    Ok(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
