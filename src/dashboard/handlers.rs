use anyhow::Context;
use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{parse_workbook, AppState, ExcludedWords, UploadedWorkbook, WordCount};
use crate::error::{HttpError, ScratchError};

type HandlerResult<T> = std::result::Result<T, HttpError>;

/// Dashboard page template
#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    has_upload: bool,
    file_name: String,
    uploaded_at: String,
    original_header: String,
    original_values: Vec<String>,
    matching_header: String,
    matching_values: Vec<String>,
    excluded: Vec<String>,
    draft_word: String,
    frequencies: Vec<FrequencyBar>,
    enough_data: bool,
}

#[allow(dead_code)] // Fields are used by Askama templates
struct FrequencyBar {
    word: String,
    count: usize,
    share: String,
    /// Bar width relative to the most common word, in percent
    width: u32,
}

fn frequency_bars(counts: &[WordCount]) -> Vec<FrequencyBar> {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1);
    counts
        .iter()
        .map(|c| FrequencyBar {
            word: c.word.clone(),
            count: c.count,
            share: format!("{:.1}", c.share),
            width: (c.count * 100 / max) as u32,
        })
        .collect()
}

/// GET / - Dashboard page
pub async fn index(State(state): State<AppState>) -> HandlerResult<Html<String>> {
    let session = state.session.read().await;
    let counts = session.frequencies(state.settings.top_words);

    let (original, matching) = match &session.upload {
        Some(upload) => (
            Some(&upload.columns.original),
            Some(&upload.columns.matching),
        ),
        None => (None, None),
    };

    let template = DashboardTemplate {
        has_upload: session.upload.is_some(),
        file_name: session
            .upload
            .as_ref()
            .map(|u| u.file_name.clone())
            .unwrap_or_default(),
        uploaded_at: session
            .upload
            .as_ref()
            .map(|u| u.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_default(),
        original_header: original.map(|c| c.header.clone()).unwrap_or_default(),
        original_values: original.map(|c| c.values.clone()).unwrap_or_default(),
        matching_header: matching.map(|c| c.header.clone()).unwrap_or_default(),
        matching_values: matching.map(|c| c.values.clone()).unwrap_or_default(),
        excluded: session.excluded.iter().map(str::to_string).collect(),
        draft_word: session.draft_word.clone(),
        enough_data: !counts.is_empty(),
        frequencies: frequency_bars(&counts),
    };

    let page = template.render().context("Template render failed")?;
    Ok(Html(page))
}

/// POST /upload - Replace the uploaded workbook
///
/// An empty file field clears the tables.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> HandlerResult<Redirect> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ScratchError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ScratchError::Upload(e.to_string()))?;

        if bytes.is_empty() {
            debug!("Empty upload, clearing columns");
            state.session.write().await.upload = None;
            return Ok(Redirect::to("/"));
        }

        let columns = parse_workbook(bytes.to_vec())?;
        info!("Stored upload {}", file_name);
        state.session.write().await.upload = Some(UploadedWorkbook {
            file_name,
            uploaded_at: Utc::now(),
            columns,
        });
        return Ok(Redirect::to("/"));
    }

    Err(ScratchError::Upload("multipart form has no 'file' field".into()).into())
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WordAction {
    Add,
    Delete,
    Reset,
}

#[derive(Debug, Deserialize)]
pub struct WordForm {
    #[serde(default)]
    pub word: String,
    pub action: WordAction,
}

/// POST /words - Add, delete or reset excluded words from the page form
pub async fn update_words(
    State(state): State<AppState>,
    Form(form): Form<WordForm>,
) -> HandlerResult<Redirect> {
    let mut session = state.session.write().await;
    match form.action {
        WordAction::Add => {
            session.excluded.add(&form.word);
            session.draft_word = form.word;
        }
        WordAction::Delete => {
            session.excluded.remove(&form.word);
            session.draft_word = form.word;
        }
        WordAction::Reset => {
            session.excluded.clear();
            session.draft_word.clear();
        }
    }
    debug!("Excluded words now: {:?}", session.excluded);
    Ok(Redirect::to("/"))
}

#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    pub upload: Option<UploadedWorkbook>,
}

/// GET /api/columns - The uploaded columns, if any
pub async fn columns(State(state): State<AppState>) -> Json<ColumnsResponse> {
    let session = state.session.read().await;
    Json(ColumnsResponse {
        upload: session.upload.clone(),
    })
}

/// GET /api/words - Excluded words
pub async fn list_words(State(state): State<AppState>) -> Json<ExcludedWords> {
    Json(state.session.read().await.excluded.clone())
}

#[derive(Debug, Deserialize)]
pub struct WordPayload {
    pub word: String,
}

/// POST /api/words - Add an excluded word
pub async fn add_word(
    State(state): State<AppState>,
    Json(payload): Json<WordPayload>,
) -> HandlerResult<Json<ExcludedWords>> {
    if payload.word.trim().is_empty() {
        return Err(ScratchError::ValidationError("word must not be blank".into()).into());
    }
    let mut session = state.session.write().await;
    session.excluded.add(&payload.word);
    Ok(Json(session.excluded.clone()))
}

/// DELETE /api/words/:word - Remove an excluded word
pub async fn delete_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> HandlerResult<Json<ExcludedWords>> {
    let mut session = state.session.write().await;
    if !session.excluded.remove(&word) {
        return Err(ScratchError::MissingElement(format!("excluded word '{}'", word)).into());
    }
    Ok(Json(session.excluded.clone()))
}

#[derive(Debug, Serialize)]
pub struct FrequencyResponse {
    pub enough_data: bool,
    pub words: Vec<WordCount>,
}

/// GET /api/frequencies - Common words across both columns
pub async fn frequencies(State(state): State<AppState>) -> Json<FrequencyResponse> {
    let words = state
        .session
        .read()
        .await
        .frequencies(state.settings.top_words);
    Json(FrequencyResponse {
        enough_data: !words.is_empty(),
        words,
    })
}

/// GET /health - Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}
