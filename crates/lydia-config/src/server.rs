use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the API listens on
    pub addr: String,
    /// Address the Prometheus exporter listens on
    pub metrics_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            metrics_addr: env::var("METRICS_ADDR").unwrap_or_else(|_| "0.0.0.0:9100".to_string()),
        }
    }
}
