pub mod cli;
pub mod env;
pub mod toml_config;

pub use cli::{CliConfig, OutputFormat};
pub use env::ApiKeys;
pub use toml_config::AppConfig;
