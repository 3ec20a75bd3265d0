//! Receipt Points API Server
//!
//! Thin HTTP wrapper around [`receipt_points::Processor`].
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Submit a receipt, returns `{"id": ...}`
//! - GET /receipts/:id/points - Points for a submitted receipt, returns `{"points": ...}`
//! - GET /health - Liveness and record count

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{create_server, run_server};
pub use state::AppState;
