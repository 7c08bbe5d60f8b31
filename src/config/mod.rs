//! Configuration loading: `config/default` and `config/local` files layered
//! under `AZULU__`-prefixed environment variables

mod app_config;

pub use app_config::{ApiConfig, AppConfig, LogFormat, LoggingConfig, SessionConfig};
