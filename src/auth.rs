use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

/// Lets the request through only when `Authorization` is exactly
/// `Bearer <secret>`.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req.headers().get(AUTHORIZATION).map(|h| h.to_str());

    match auth_header {
        Some(Ok(val)) if val == state.authorization => Ok(next.run(req).await),
        Some(Ok(_)) => {
            warn!("⛔ Auth Failed: Invalid token for {:?}", req.uri());
            Err(AppError::Unauthorized)
        }
        Some(Err(_)) => {
            warn!(
                "⛔ Auth Failed: Undecodable Authorization header for {:?}",
                req.uri()
            );
            Err(AppError::Unauthorized)
        }
        None => {
            warn!("⛔ Auth Failed: Missing Authorization header for {:?}", req.uri());
            Err(AppError::Unauthorized)
        }
    }
}
