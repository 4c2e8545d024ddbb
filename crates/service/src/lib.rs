pub mod http_server;
mod process;

mod config;
mod state;

pub use config::{
    Config as ServiceConfig, ConfigError as ServiceConfigError, RouteSet, DEFAULT_PORT,
};
pub use process::{spawn_service, ServiceError};
pub use state::{State as ServiceState, StateSetupError as ServiceStateSetupError};
