// GET /api/words — top stored words as JSON.
//
// Optional ?limit= (defaults to, and is capped at, the configured result limit).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct WordsQuery {
    pub limit: Option<usize>,
}

pub async fn list_words(
    State(state): State<AppState>,
    query: Result<Query<WordsQuery>, QueryRejection>,
) -> Response {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected /api/words query");
            return api_error(
                StatusCode::BAD_REQUEST,
                &format!("Invalid query: {}", rejection.body_text()),
            );
        }
    };

    let max = state.config.result_limit;
    let limit = params.limit.unwrap_or(max).min(max);

    match state
        .db
        .get_top_words(u32::try_from(limit).unwrap_or(u32::MAX))
        .await
    {
        Ok(words) => {
            let words: Vec<serde_json::Value> = words
                .into_iter()
                .enumerate()
                .map(|(i, w)| {
                    serde_json::json!({
                        "rank": i + 1,
                        "word": w.word,
                        "tf": w.tf,
                        "idf": w.idf,
                        "upload_id": w.upload_id,
                    })
                })
                .collect();
            Json(serde_json::json!({ "words": words, "limit": limit })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "DB error fetching words");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
