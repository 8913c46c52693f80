use crate::dex::Lookup;
use crate::error::{AppError, AppResult};
use crate::oracle::{self, Question};
use crate::protocol::{GuessRequest, GuessResponse};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;
use tracing::debug;

// The body is taken raw so a missing or odd Content-Type still gets the
// same 400 as broken JSON.
pub async fn guess(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<GuessResponse>> {
    // 1. Decode
    let request: GuessRequest = serde_json::from_slice(&body)?;

    // 2. Load
    let dex = state.dex.fetch().await?;

    // 3. Lookup
    let entry = match dex.lookup(&request.subject) {
        Lookup::Found(entry) => entry,
        Lookup::Malformed(reason) => {
            return Err(AppError::MalformedEntry {
                name: request.subject,
                reason: reason.to_string(),
            })
        }
        Lookup::Missing => return Err(AppError::NotFound(request.subject)),
    };

    // 4. Classify
    let question = Question::parse(&request.question);
    let response = oracle::answer(&request.subject, entry, &question);

    debug!("❓ {} | {:?} -> {:?}", request.subject, question, response);
    Ok(Json(GuessResponse { response }))
}
