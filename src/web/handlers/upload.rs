// Upload handlers — GET and POST /upload_form/.
//
// GET renders the empty form. POST expects multipart/form-data with a
// single `file` field. Validation problems re-render the form with a
// message; they are never treated as errors. A valid file goes through the
// ingest pipeline and the client is redirected (303) to /result/.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::pipeline::ingest::ingest_bytes;
use crate::web::{templates, AppState, WebError};

/// Name of the multipart field carrying the file.
pub const FILE_FIELD: &str = "file";

/// Why a submitted form was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// No `file` field in the submission
    Missing,
    /// A `file` field without a file name (nothing was chosen)
    NoFileSelected,
    /// The chosen file has zero bytes
    Empty,
    /// The body exceeded the configured upload limit
    TooLarge,
    /// The multipart body could not be parsed
    Malformed(String),
}

impl FormError {
    pub fn message(&self) -> String {
        match self {
            FormError::Missing => "This field is required.".to_string(),
            FormError::NoFileSelected => "No file was submitted.".to_string(),
            FormError::Empty => "The submitted file is empty.".to_string(),
            FormError::TooLarge => "The submitted file is too large.".to_string(),
            FormError::Malformed(detail) => format!("The upload could not be read: {detail}"),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            FormError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::OK,
        }
    }
}

impl From<MultipartError> for FormError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            FormError::TooLarge
        } else {
            FormError::Malformed(err.body_text())
        }
    }
}

/// A file pulled out of the form.
#[derive(Debug)]
pub struct SubmittedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// GET /upload_form/ — the empty form.
pub async fn show_form() -> Result<Response, WebError> {
    render_form(StatusCode::OK, None)
}

/// POST /upload_form/ — validate, store, score, persist, redirect.
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, WebError> {
    // A POST that isn't multipart at all carries no file field
    let submitted = match multipart {
        Ok(mut multipart) => read_file_field(&mut multipart).await,
        Err(_) => Err(FormError::Missing),
    };

    let file = match submitted {
        Ok(file) => file,
        Err(form_error) => {
            tracing::info!(reason = ?form_error, "Upload form rejected");
            return render_form(form_error.status(), Some(&form_error.message()));
        }
    };

    ingest_bytes(
        &state.db,
        state.scorer.as_ref(),
        &state.config.upload_dir,
        &file.file_name,
        &file.bytes,
    )
    .await?;

    Ok(Redirect::to("/result/").into_response())
}

/// Find and validate the `file` field. Other fields are ignored.
pub async fn read_file_field(multipart: &mut Multipart) -> Result<SubmittedFile, FormError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(FormError::NoFileSelected),
        };
        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(FormError::Empty);
        }

        return Ok(SubmittedFile {
            file_name,
            bytes: bytes.to_vec(),
        });
    }
    Err(FormError::Missing)
}

fn render_form(status: StatusCode, error: Option<&str>) -> Result<Response, WebError> {
    let html = templates::upload_form(error)?;
    Ok((status, Html(html)).into_response())
}
