use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (HOST), defaults to all interfaces
    pub host: IpAddr,
    /// Listening port (PORT)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Build from raw variable values, falling back to defaults for anything
    /// missing or unparsable
    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let defaults = Self::default();

        let host = match host {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid HOST {:?}, using {}", raw, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match port {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self { host, port }
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
