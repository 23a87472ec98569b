use crate::{ApiError, ApiResult};

use axum::extract::Multipart;
use bytes::Bytes;

pub const IMAGE_FIELD: &str = "file";
const DEFAULT_IMAGE_CONTENT_TYPE: &str = "application/octet-stream";

/// One uploaded file pulled from a multipart body
#[derive(Debug)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedImage {
    /// Read the `file` field; other fields are ignored
    pub async fn from_multipart(mut multipart: Multipart) -> ApiResult<Self> {
        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(IMAGE_FIELD) {
                continue;
            }

            let file_name = field
                .file_name()
                .map(sanitize_file_name)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| ApiError::bad_request("Uploaded file has no name"))?;
            let content_type = field
                .content_type()
                .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
                .to_string();
            let bytes = field.bytes().await?;

            if bytes.is_empty() {
                return Err(ApiError::bad_request("Uploaded file is empty"));
            }

            return Ok(Self {
                file_name,
                content_type,
                bytes,
            });
        }

        Err(ApiError::bad_request(format!(
            "Missing '{IMAGE_FIELD}' field"
        )))
    }
}

/// Last path segment only, so uploads cannot escape `{asset_id}/`
pub(crate) fn sanitize_file_name(name: &str) -> String {
    name.rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
