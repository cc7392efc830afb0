//! JSON bodies returned by the gateway endpoints.

use serde::Serialize;

/// `POST /file` success body.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub message: String,
}

/// `GET /file` success body for both URL strategies.
#[derive(Debug, Serialize)]
pub struct AccessUrlResponse {
    pub url: String,
    pub error: bool,
}

/// `GET /file` failure body for the signed path.
#[derive(Debug, Serialize)]
pub struct AccessUrlError {
    pub message: String,
    pub error: bool,
}

/// `GET /buckets` success body.
#[derive(Debug, Serialize)]
pub struct BucketsResponse {
    pub buckets: Vec<String>,
}

/// `GET /objects` body; `data` carries the keys on success and the backend's
/// error message on failure, flagged by `error`.
#[derive(Debug, Serialize)]
pub struct ObjectsResponse {
    pub error: bool,
    pub data: ObjectsData,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ObjectsData {
    Keys(Vec<String>),
    Message(String),
}
