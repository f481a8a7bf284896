use core_config::{app_info, cors::CorsConfig, env_parse, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (RUN_MIGRATIONS, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - DATABASE_URL must be set
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080
        let cors = CorsConfig::from_env()?; // CORS_ALLOWED_ORIGIN=*
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            cors,
            environment,
            run_migrations,
        })
    }
}
