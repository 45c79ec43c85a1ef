//! Word-matching dashboard
//!
//! A small web page: upload a workbook, see the two columns to be matched
//! side by side, keep a list of domain-specific words to exclude, and see
//! which words are most common across both columns. State lives in memory
//! for the lifetime of the server; one active session is assumed.

pub mod frequency;
pub mod handlers;
pub mod words;
pub mod workbook;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

use crate::config::DashboardSettings;
use crate::error::Result;

pub use frequency::{word_frequencies, WordCount};
pub use words::ExcludedWords;
pub use workbook::{parse_workbook, ColumnData, MatchingColumns};

/// The last workbook uploaded
#[derive(Debug, Clone, Serialize)]
pub struct UploadedWorkbook {
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub columns: MatchingColumns,
}

/// Everything the page shows
#[derive(Debug, Default)]
pub struct Session {
    pub upload: Option<UploadedWorkbook>,
    pub excluded: ExcludedWords,
    /// Current content of the word input box
    pub draft_word: String,
}

impl Session {
    /// Common words across both uploaded columns, excluded words left out.
    pub fn frequencies(&self, top_n: usize) -> Vec<WordCount> {
        match &self.upload {
            Some(upload) => word_frequencies(upload.columns.all_values(), &self.excluded, top_n),
            None => Vec::new(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub settings: Arc<DashboardSettings>,
}

impl AppState {
    pub fn new(settings: DashboardSettings) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::default())),
            settings: Arc::new(settings),
        }
    }
}

/// Create the router with the page, form and JSON endpoints
pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.settings.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload))
        .route("/words", post(handlers::update_words))
        .route("/api/columns", get(handlers::columns))
        .route(
            "/api/words",
            get(handlers::list_words).post(handlers::add_word),
        )
        .route("/api/words/:word", delete(handlers::delete_word))
        .route("/api/frequencies", get(handlers::frequencies))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // Multipart has its own 2MB default; the configured limit replaces it
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(upload_limit))
        .layer(TraceLayer::new_for_http())
}

/// Run the dashboard until Ctrl-C.
pub async fn serve(settings: DashboardSettings) -> Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind dashboard to {}", addr))?;
    info!("Dashboard listening on http://{}", listener.local_addr()?);

    let app = create_router(AppState::new(settings));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Dashboard server failed")?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Could not listen for Ctrl-C; stop the process to exit");
        std::future::pending::<()>().await;
    }
}
