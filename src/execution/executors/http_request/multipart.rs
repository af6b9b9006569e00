//! HTTP request helpers (multipart).

use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;
use tokio_util::io::ReaderStream;

use super::{HttpExecutionConfig, notify_on_error, send_and_read};
use crate::error::InvokeError;
use crate::execution::http::headers::multipart_request_headers;
use crate::execution::http::interceptor::HttpRequestContext;
use crate::types::{InvokeResponse, MultipartPayload, PayloadKind};

/// Encode a multipart payload into a `reqwest` form.
///
/// Every file is opened here, before any request exists, so a missing file
/// or a path that is not a regular file fails with [`InvokeError::Io`] and
/// nothing is sent. Each open handle is moved into its part's body stream
/// and closed when that stream is dropped.
pub async fn build_multipart_form(payload: &MultipartPayload) -> Result<Form, InvokeError> {
    let mut form = Form::new();
    for (name, value) in payload.fields() {
        form = form.text(name.clone(), value.clone());
    }

    for file_part in payload.files() {
        let file = tokio::fs::File::open(&file_part.path)
            .await
            .map_err(|e| InvokeError::io(&file_part.path, e))?;
        let meta = file
            .metadata()
            .await
            .map_err(|e| InvokeError::io(&file_part.path, e))?;
        if !meta.is_file() {
            return Err(InvokeError::io(
                &file_part.path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
        let len = meta.len();
        let mime = file_part.effective_mime();

        tracing::debug!(
            target: "regolo_invoke::http",
            field = %file_part.field,
            filename = %file_part.filename,
            mime = %mime,
            bytes = len,
            "streaming file part"
        );

        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
        let part = Part::stream_with_length(body, len)
            .file_name(file_part.filename.clone())
            .mime_str(&mime)
            .map_err(|e| InvokeError::Configuration(format!("Invalid MIME type '{mime}': {e}")))?;
        form = form.part(file_part.field.clone(), part);
    }

    Ok(form)
}

/// POST a multipart form and read the response.
///
/// `Content-Type` comes from the form encoder and carries its boundary.
pub async fn execute_multipart_request(
    config: &HttpExecutionConfig,
    url: &str,
    payload: &MultipartPayload,
) -> Result<InvokeResponse, InvokeError> {
    let ctx = HttpRequestContext::new(url, PayloadKind::Multipart);

    let result = send_multipart(config, &ctx, url, payload).await;
    notify_on_error(config, &ctx, result)
}

async fn send_multipart(
    config: &HttpExecutionConfig,
    ctx: &HttpRequestContext,
    url: &str,
    payload: &MultipartPayload,
) -> Result<InvokeResponse, InvokeError> {
    let form = build_multipart_form(payload).await?;
    let headers = multipart_request_headers(config.credential.expose_secret())?;
    let rb = config
        .http_client
        .post(url)
        .headers(headers.clone())
        .multipart(form);
    send_and_read(config, ctx, rb, &headers).await
}
