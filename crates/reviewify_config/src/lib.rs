use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources are layered, later ones winning: `config/default`, then
/// `config/{RUN_ENV}`, then `APP`-prefixed environment variables with `__`
/// as the section separator (e.g. `APP_SERVER__PORT=9090`). A plain
/// `DATABASE_URL` variable is also honored as the database connection
/// descriptor, matching how the service has always been deployed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"));

    let mut config: AppConfig = builder.build()?.try_deserialize()?;

    if config.database.is_none() {
        if let Ok(url) = env::var("DATABASE_URL") {
            config.database = Some(DatabaseConfig { url });
        }
    }

    tracing::debug!(
        host = %config.server.host,
        port = config.server.port,
        has_database = config.database.is_some(),
        "configuration loaded"
    );
    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures `.env` is loaded into the environment exactly once.
///
/// `DOTENV_OVERRIDE` can point at an alternative file, which is useful for
/// running several instances against different stores on one machine.
pub fn ensure_dotenv_loaded() {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());
    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });
}
