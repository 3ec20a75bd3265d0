//! Server configuration from command-line flags and environment.

use clap::Parser;

/// API server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-points-server", version, about = "Receipt points scoring service")]
pub struct ApiConfig {
    /// Address to bind
    #[arg(long, env = "RECEIPT_POINTS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "RECEIPT_POINTS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[arg(long, env = "RECEIPT_POINTS_CORS")]
    pub cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors: false,
        }
    }
}
