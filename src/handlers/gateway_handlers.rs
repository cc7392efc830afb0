//! HTTP handlers for the gateway endpoints.
//!
//! Each handler extracts its parameters, invokes exactly one
//! `GatewayService` operation, and serializes the result into the endpoint's
//! JSON contract. No storage logic lives here.

use crate::{
    errors::AppError,
    models::{
        access::AccessType,
        responses::{
            AccessUrlError, AccessUrlResponse, BucketsResponse, ObjectsData, ObjectsResponse,
            UploadResponse,
        },
    },
    services::gateway_service::GatewayService,
};
use axum::{
    Json,
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;

/// Query params accepted by `POST /file`.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub bucket: Option<String>,
}

/// Query params accepted by `GET /file`.
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub file_name: Option<String>,
    pub access_type: Option<String>,
    pub bucket: Option<String>,
}

/// Query params accepted by `GET /objects`.
#[derive(Debug, Deserialize)]
pub struct ListObjectsQuery {
    pub bucket: Option<String>,
}

/// `POST /file` — upload the multipart `file` field under its submitted name.
///
/// The field is buffered whole before the store write, so usable file size is
/// bounded by memory.
pub async fn upload_file(
    State(service): State<GatewayService>,
    Query(q): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::bad_request("uploaded file must have a filename"))?;

        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::internal(err.to_string()))?;

        let uploaded = service
            .upload(&file_name, data, q.bucket.as_deref())
            .await
            .map_err(|err| AppError::internal(err.to_string()))?;

        return Ok(Json(UploadResponse {
            filename: uploaded.key,
            message: "file uploaded successfully".into(),
        }));
    }

    Err(AppError::bad_request("file form field is required"))
}

/// `GET /file` — issue a retrieval URL for `file_name`.
///
/// `access_type=public` (case-insensitive) yields a constructed public link;
/// anything else, including no value, yields a time-limited signed link.
pub async fn download_file(
    State(service): State<GatewayService>,
    Query(q): Query<DownloadQuery>,
) -> Response {
    let Some(file_name) = q.file_name.filter(|name| !name.is_empty()) else {
        return AppError::bad_request("file_name query parameter is required").into_response();
    };

    let access_type = AccessType::from_query(q.access_type.as_deref().unwrap_or_default());

    match service
        .resolve_access_url(&file_name, access_type, q.bucket.as_deref())
        .await
    {
        Ok(url) => (StatusCode::OK, Json(AccessUrlResponse { url, error: false })).into_response(),
        Err(err) => {
            let message = format!("error generating presigned URL: {}", err);
            warn!(%file_name, "{message}");
            (
                StatusCode::BAD_REQUEST,
                Json(AccessUrlError {
                    message,
                    error: true,
                }),
            )
                .into_response()
        }
    }
}

/// `GET /buckets` — enumerate all buckets in the store.
pub async fn list_buckets(
    State(service): State<GatewayService>,
) -> Result<Json<BucketsResponse>, AppError> {
    let buckets = service.list_buckets().await?;
    Ok(Json(BucketsResponse { buckets }))
}

/// `GET /objects` — enumerate every object key in the effective bucket.
///
/// Fail-fast: a backend error partway through enumeration is reported alone,
/// with no partial key list.
pub async fn list_objects(
    State(service): State<GatewayService>,
    Query(q): Query<ListObjectsQuery>,
) -> Response {
    match service.list_objects(q.bucket.as_deref()).await {
        Ok(keys) => (
            StatusCode::OK,
            Json(ObjectsResponse {
                error: false,
                data: ObjectsData::Keys(keys),
            }),
        )
            .into_response(),
        Err(err) => {
            warn!("object listing failed: {err}");
            (
                StatusCode::BAD_REQUEST,
                Json(ObjectsResponse {
                    error: true,
                    data: ObjectsData::Message(err.to_string()),
                }),
            )
                .into_response()
        }
    }
}
