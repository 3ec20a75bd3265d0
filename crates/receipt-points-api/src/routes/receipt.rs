//! Receipt submission and points lookup endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use receipt_points::{Receipt, ReceiptId};

use crate::dto::{IdResponse, PointsResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Submit a receipt for scoring
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<IdResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected receipt body");
        ApiError::from(rejection)
    })?;

    let id = state.processor.submit(receipt).await?;

    Ok(Json(IdResponse { id: id.to_hex() }))
}

/// Get the points awarded to a submitted receipt
///
/// An id that is not valid hex was never issued, so it is reported as not
/// found rather than as a bad request.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let receipt_id = ReceiptId::from_hex(&id)
        .map_err(|_| ApiError::NotFound(format!("No receipt found for id {id}")))?;

    let points = state.processor.lookup(&receipt_id).await?;

    Ok(Json(PointsResponse { points }))
}
