//! Shared setup for router integration tests

#![allow(dead_code)]

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Method, StatusCode, header},
};
use http_body_util::BodyExt;
use portfolio::{AppState, email::Notifier};
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

pub struct TestApp {
    pub dir: TempDir,
    pub pool: SqlitePool,
    pub router: Router,
}

/// Build the router over a migrated temp-dir SQLite database
pub async fn setup_app(notifier: Notifier) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let pool = portfolio::db::create_pool(&url, 5).await?;
    portfolio::db::migrate(&pool).await?;

    let router = portfolio::router(AppState::new(pool.clone(), notifier));

    Ok(TestApp { dir, pool, router })
}

pub async fn post_contact(
    router: &Router,
    content_type: &str,
    body: impl Into<Body>,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/contact/")
                .header(header::CONTENT_TYPE, content_type)
                .body(body.into())?,
        )
        .await?;

    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}

pub async fn post_json(
    router: &Router,
    body: serde_json::Value,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    post_contact(router, "application/json", body.to_string()).await
}

pub async fn count_messages(pool: &SqlitePool) -> anyhow::Result<i64> {
    Ok(portfolio_contact::Query(pool.clone()).count().await?)
}

/// In-memory sink for the operational log
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Capture logs emitted on the current thread until the guard is dropped
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    (buffer, tracing::subscriber::set_default(subscriber))
}
