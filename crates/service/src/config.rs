use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use dotenvy::dotenv;

pub const DEFAULT_PORT: u16 = 8001;

/// Which account routes the server exposes. `/` is always mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RouteSet {
    /// `/accounts`: uuid ids, company names, random account types
    Rich,
    /// `/accounts/dda`: sequential ids, templated nicknames
    Dda,
    #[default]
    Both,
}

impl RouteSet {
    pub fn serves_rich(&self) -> bool {
        matches!(self, RouteSet::Rich | RouteSet::Both)
    }

    pub fn serves_dda(&self) -> bool {
        matches!(self, RouteSet::Dda | RouteSet::Both)
    }
}

impl FromStr for RouteSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rich" => Ok(RouteSet::Rich),
            "dda" => Ok(RouteSet::Dda),
            "both" => Ok(RouteSet::Both),
            _ => Err(ConfigError::RouteSet(s.to_string())),
        }
    }
}

impl fmt::Display for RouteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteSet::Rich => "rich",
            RouteSet::Dda => "dda",
            RouteSet::Both => "both",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// address for our http server to listen on.
    ///  defaults to 0.0.0.0:8001
    pub listen_addr: SocketAddr,
    /// account routes to mount
    pub route_set: RouteSet,

    // misc
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            route_set: RouteSet::default(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl Config {
    /// Read LISTEN_ADDR, ROUTE_SET and LOG_LEVEL from the environment,
    ///  loading a .env file first if one exists.
    pub fn from_env() -> Result<Config, ConfigError> {
        check_dotenv(dotenv())?;

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys
    ///  fall back to defaults, malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(addr) => addr.parse::<SocketAddr>()?,
            None => defaults.listen_addr,
        };

        let route_set = match lookup("ROUTE_SET") {
            Some(route_set) => route_set.parse::<RouteSet>()?,
            None => defaults.route_set,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => tracing::Level::from_str(level.trim())
                .map_err(|_| ConfigError::LogLevel(level))?,
            None => defaults.log_level,
        };

        Ok(Config {
            listen_addr,
            route_set,
            log_level,
        })
    }
}

/// A missing .env is fine, the process env still applies.
///  Anything else (a malformed line, unreadable file) is an error.
fn check_dotenv<T>(result: Result<T, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
    #[error("Invalid Socket Address: {0}")]
    ListenAddr(#[from] std::net::AddrParseError),
    #[error("Invalid route set '{0}', expected one of: rich, dda, both")]
    RouteSet(String),
    #[error("Invalid log level '{0}'")]
    LogLevel(String),
}
