//! File responses shared by the export, compile and PDF endpoints.

use axum::{
    body::Body,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

pub const TEX_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// `Content-Disposition: attachment` response. The browser saves the body
/// under `filename`.
pub fn attachment(content_type: &'static str, filename: &str, body: impl Into<Body>) -> Response {
    file_response(content_type, "attachment", filename, body.into())
}

/// `Content-Disposition: inline` response, shown in the preview pane.
pub fn inline(content_type: &'static str, filename: &str, body: impl Into<Body>) -> Response {
    file_response(content_type, "inline", filename, body.into())
}

fn file_response(content_type: &'static str, disposition: &str, filename: &str, body: Body) -> Response {
    // Header values must be visible ASCII.
    let ascii_name: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .collect();
    let disposition = HeaderValue::from_str(&format!("{disposition}; filename=\"{ascii_name}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}
