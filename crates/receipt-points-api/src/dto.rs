//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Response to a successful submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdResponse {
    /// 64-character hex identifier.
    pub id: String,
}

/// Response to a successful points lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub receipts: usize,
}
