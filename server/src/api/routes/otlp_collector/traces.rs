//! Traces export endpoint

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use opentelemetry_proto::tonic::collector::trace::v1::{
    ExportTraceServiceRequest, ExportTraceServiceResponse,
};

use super::OtlpState;
use super::encoding::{OtlpContentType, decode_request, success_response};
use crate::api::extractors::is_valid_project_id;
use crate::core::constants::{ACCEPTED_SPANS_HEADER, DEFAULT_ORG_ID, ORG_ID_HEADER};

pub async fn export(
    State(state): State<OtlpState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Validate project_id
    if !is_valid_project_id(&project_id) {
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain")],
            "Invalid project_id",
        )
            .into_response();
    }

    let content_type = OtlpContentType::from_headers(&headers);

    // Parse request (protobuf or JSON based on content type)
    let request = match decode_request(&body, content_type) {
        Ok(req) => req,
        Err(e) => return e.into_response(content_type),
    };

    let org_id = org_id_from_headers(&headers);
    let span_count = count_spans(&request);
    tracing::info!(project_id, span_count, "Processing trace request");

    let accepted = match state.pipeline.process(&org_id, &project_id, &request).await {
        Ok(accepted) => accepted,
        Err(e) => {
            tracing::error!(error = %e, project_id, "Trace ingestion failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain")],
                "Failed to store spans",
            )
                .into_response();
        }
    };

    // Return OTLP-compliant response (matching request content type),
    // with the accepted-span count surfaced in a response header
    let response = ExportTraceServiceResponse {
        partial_success: None,
    };
    let mut response = success_response(&response, content_type);
    if let Ok(value) = HeaderValue::from_str(&accepted.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(ACCEPTED_SPANS_HEADER), value);
    }
    response
}

/// Organization id injected by the upstream auth layer, or the bootstrap org
fn org_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(ORG_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_ORG_ID)
        .to_string()
}

fn count_spans(request: &ExportTraceServiceRequest) -> usize {
    request
        .resource_spans
        .iter()
        .flat_map(|r| &r.scope_spans)
        .map(|s| s.spans.len())
        .sum()
}
