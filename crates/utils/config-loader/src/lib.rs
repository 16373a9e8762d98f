pub mod app_config;
pub mod env;
pub mod loader;
pub mod logging;

pub use app_config::BaseAppConfig;
pub use config::ConfigError;
pub use env::Env;
pub use loader::load_config;
pub use logging::LoggerConfig;
