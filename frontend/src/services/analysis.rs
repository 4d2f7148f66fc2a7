//! HTTP service uploading a PDF to the analysis endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::{AnalysisResponse, AppError, AppResult};

/// Upload a PDF and decode the analysis response.
///
/// The status code is not inspected: the service reports application
/// errors as a JSON `error` body with a 4xx/5xx status, and those must
/// reach the page like any other response.
pub async fn upload_pdf(file: File, endpoint: &str) -> AppResult<AnalysisResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(|e| AppError::Request(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

    log::info!("Uploading {} ({} bytes) to {}", file.name(), file.size(), endpoint);

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read body: {}", e)))?;

    log::debug!("Analysis endpoint answered {} ({} bytes)", status, body.len());
    decode_response(status, &body)
}

/// Decode a response body, whatever its status.
pub fn decode_response(status: u16, body: &str) -> AppResult<AnalysisResponse> {
    serde_json::from_str(body)
        .map_err(|e| AppError::Decode(format!("Failed to parse response ({}): {}", status, e)))
}
