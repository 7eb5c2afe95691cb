//! Custom Axum extractors

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Form;

use super::error::ApiError;

/// Name of the multipart part carrying an uploaded file
const FILE_FIELD: &str = "file";

/// Extract an integer id from the path, answering 422 on bad input
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;

        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::invalid_integer("id", &raw))?;

        Ok(Self(id))
    }
}

/// A file part from a multipart upload
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// Form fields from either a urlencoded or a multipart body.
///
/// Text parts become fields; the part named `file` becomes [`UploadedFile`].
/// A file part with neither a filename nor content counts as no upload.
#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
    file: Option<UploadedFile>,
}

impl FormFields {
    /// Required text field.
    pub fn text(&self, name: &str) -> Result<&str, ApiError> {
        self.fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ApiError::missing_field(name))
    }

    /// Required integer field.
    pub fn int(&self, name: &str) -> Result<i64, ApiError> {
        let raw = self.text(name)?;
        raw.trim()
            .parse()
            .map_err(|_| ApiError::invalid_integer(name, raw))
    }

    /// Take the uploaded file, if one was sent.
    pub fn take_file(&mut self) -> Option<UploadedFile> {
        self.file.take()
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| ApiError::Rejected {
            status: e.status(),
            message: e.body_text(),
        })? {
            let name = field.name().unwrap_or("").to_string();
            let filename = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(|e| ApiError::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;

            if name == FILE_FIELD {
                let filename = filename.unwrap_or_default();
                if filename.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.file = Some(UploadedFile { filename, bytes });
            } else {
                let value = String::from_utf8(bytes.to_vec()).map_err(|_| ApiError::Validation {
                    message: format!("field '{}' is not valid UTF-8", name),
                })?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::Rejected {
                    status: e.status(),
                    message: e.body_text(),
                })?;
            return Self::from_multipart(multipart).await;
        }

        let Form(pairs): Form<Vec<(String, String)>> = Form::from_request(req, state)
            .await
            .map_err(|e| ApiError::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;

        Ok(Self {
            fields: pairs.into_iter().collect(),
            file: None,
        })
    }
}
