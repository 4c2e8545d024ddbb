use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    // Listen address
    pub listen_addr: SocketAddr,

    // log level for http tracing
    pub log_level: tracing::Level,
}

impl Config {
    pub fn new(listen_addr: SocketAddr, log_level: tracing::Level) -> Self {
        Self {
            listen_addr,
            log_level,
        }
    }
}

impl From<&crate::ServiceConfig> for Config {
    fn from(config: &crate::ServiceConfig) -> Self {
        Self::new(config.listen_addr, config.log_level)
    }
}
