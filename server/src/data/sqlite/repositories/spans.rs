//! Span repository
//!
//! Enriched span storage and the task-scoped query surface.

use sqlx::SqlitePool;

use super::super::error::SqliteError;
use crate::data::types::SpanRecord;

/// Insert a batch of span records in a single transaction.
///
/// All-or-nothing: a failure on any row rolls back the whole batch so a
/// trace submission is never partially visible.
pub async fn insert_batch(pool: &SqlitePool, records: &[SpanRecord]) -> Result<(), SqliteError> {
    let now = chrono::Utc::now().timestamp();
    let mut tx = pool.begin().await?;

    for record in records {
        sqlx::query(
            "INSERT INTO spans (org_id, project_id, task_id, session_id, metadata, raw_span, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.org_id)
        .bind(&record.project_id)
        .bind(&record.task_id)
        .bind(&record.session_id)
        .bind(record.metadata.as_ref().map(|m| m.to_string()))
        .bind(record.raw_span.to_string())
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Fetch all spans correlated with a task, in insertion order.
///
/// Internal row ids are never selected, so they cannot leak to callers.
pub async fn get_spans_for_task(
    pool: &SqlitePool,
    project_id: &str,
    task_id: &str,
) -> Result<Vec<SpanRecord>, SqliteError> {
    type Row = (
        String,
        String,
        Option<String>,
        Option<String>,
        Option<String>,
        String,
    );

    let rows: Vec<Row> = sqlx::query_as(
        "SELECT org_id, project_id, task_id, session_id, metadata, raw_span \
         FROM spans WHERE project_id = ? AND task_id = ? ORDER BY id",
    )
    .bind(project_id)
    .bind(task_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(
            |(org_id, project_id, task_id, session_id, metadata, raw_span)| {
                Ok(SpanRecord {
                    org_id,
                    project_id,
                    task_id,
                    session_id,
                    metadata: metadata
                        .as_deref()
                        .map(serde_json::from_str)
                        .transpose()?,
                    raw_span: serde_json::from_str(&raw_span)?,
                })
            },
        )
        .collect()
}
