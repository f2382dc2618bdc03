//! Raw trace repository
//!
//! Append-only audit trail of ingested OTLP payloads. Rows are written
//! before any enrichment so the original submission survives pipeline bugs.

use serde_json::Value as JsonValue;
use sqlx::SqlitePool;

use super::super::error::SqliteError;

/// Append a raw trace payload
pub async fn insert_raw_trace(
    pool: &SqlitePool,
    org_id: &str,
    project_id: &str,
    payload: &JsonValue,
) -> Result<(), SqliteError> {
    let now = chrono::Utc::now().timestamp();
    sqlx::query(
        "INSERT INTO raw_traces (org_id, project_id, payload, received_at) VALUES (?, ?, ?, ?)",
    )
    .bind(org_id)
    .bind(project_id)
    .bind(payload.to_string())
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

/// Count raw traces for a project (test helper)
#[cfg(test)]
pub async fn count_for_project(pool: &SqlitePool, project_id: &str) -> Result<i64, SqliteError> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM raw_traces WHERE project_id = ?")
        .bind(project_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
