// Public modules
pub mod config;
pub mod dive;
pub mod errors;
pub mod query;
pub mod render;
pub mod resolve;
pub mod types;

// Re-export commonly used items
pub use config::{load_config, load_config_with_env, Config, EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use dive::Dive;
pub use errors::DiveError;
pub use query::{ClusterQuery, KubeGateway};
pub use render::render_report;
pub use types::*;
