// GET /result/ — the ranked word table.
//
// Shows up to `result_limit` rows from every upload so far, ordered by idf
// descending.

use axum::extract::State;
use axum::response::Html;

use crate::web::{templates, AppState, WebError};

pub async fn result_view(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let limit = u32::try_from(state.config.result_limit).unwrap_or(u32::MAX);
    let words = state.db.get_top_words(limit).await?;
    Ok(Html(templates::result_page(&words)?))
}
