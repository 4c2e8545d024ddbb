use std::net::SocketAddr;

use clap::Args;

use service::{spawn_service, RouteSet, ServiceConfig, ServiceConfigError, ServiceError};

#[derive(Args, Debug, Clone)]
pub struct Serve {
    /// Address to listen on (default: LISTEN_ADDR or 0.0.0.0:8001)
    #[arg(long)]
    pub listen_addr: Option<SocketAddr>,

    /// Account routes to serve (default: ROUTE_SET or both)
    #[arg(long, value_enum)]
    pub routes: Option<RouteSet>,

    /// Log level (default: LOG_LEVEL or info)
    #[arg(long)]
    pub log_level: Option<tracing::Level>,
}

impl Serve {
    /// Flags win over the environment.
    fn apply(&self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(listen_addr) = self.listen_addr {
            config.listen_addr = listen_addr;
        }
        if let Some(routes) = self.routes {
            config.route_set = routes;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
        config
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("config error: {0}")]
    Config(#[from] ServiceConfigError),

    #[error("service failed: {0}")]
    Service(#[from] ServiceError),
}

#[async_trait::async_trait]
impl crate::op::Op for Serve {
    type Error = ServeError;
    type Output = String;

    async fn execute(&self) -> Result<Self::Output, Self::Error> {
        let config = self.apply(ServiceConfig::from_env()?);
        spawn_service(&config).await?;
        Ok("service stopped".to_string())
    }
}
