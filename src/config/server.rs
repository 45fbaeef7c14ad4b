use crate::core::{AppError, Result};
use std::thread;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: default_workers(),
        }
    }

    pub fn from_vars<F>(var: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match var("SERVER_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| AppError::configuration("Invalid SERVER_PORT"))?,
            None => 8080,
        };

        let mut config = Self::new(host, port);
        if let Some(workers) = var("SERVER_WORKERS") {
            config.workers = workers
                .parse()
                .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Signing is CPU-light; one worker per core is plenty
fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
