use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 3001 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()
    }
}

impl ServerConfig {
    /// Env fallback used when no config file is present:
    /// `SERVER_HOST`, `SERVER_PORT` and `TOKIO_WORKER_THREADS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(defaults.worker_threads);
        Self { host, port, worker_threads }
    }

    /// Config file first, env second. A missing file falls through quietly;
    /// an unreadable or invalid one is logged before falling back.
    pub fn resolve() -> Self {
        match AppConfig::load_and_validate() {
            Ok(cfg) => cfg.server,
            Err(e) => {
                if !is_missing_file(&e) {
                    warn!(error = %e, "config file unusable, falling back to env");
                }
                let mut s = Self::from_env();
                match s.normalize() {
                    Ok(()) => s,
                    Err(e) => {
                        warn!(error = %e, "server env settings invalid, using defaults");
                        Self::default()
                    }
                }
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3001);
    }

    #[test]
    fn server_section_is_read() {
        let mut cfg = parse("[server]\nhost = \"0.0.0.0\"\nport = 8080\nworker_threads = 0\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn blank_host_is_normalized() {
        let mut cfg = parse("[server]\nhost = \"  \"\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg = parse("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/roles-api-config.toml").is_err());
    }

    #[test]
    fn only_a_missing_file_counts_as_missing() {
        let missing = load_from_file("/nonexistent/roles-api-config.toml").unwrap_err();
        assert!(is_missing_file(&missing));
        let broken = parse("[server\nport = 1").unwrap_err();
        assert!(!is_missing_file(&broken));
        let mut cfg = parse("[server]\nport = 0\n").unwrap();
        assert!(!is_missing_file(&cfg.normalize_and_validate().unwrap_err()));
    }
}
