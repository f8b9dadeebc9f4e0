use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Everything the registry reads from the environment at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` is unset; users are then kept in memory
    pub database: Option<PostgresConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            database: PostgresConfig::from_env_optional()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }

    /// Human-readable name of the backing store, for startup logs
    pub fn store(&self) -> &'static str {
        if self.database.is_some() {
            "postgres"
        } else {
            "in-memory"
        }
    }
}
