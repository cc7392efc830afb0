//! Remote object-store client abstraction.
//!
//! The gateway treats the backend as a remote service with its own failure
//! modes; everything it needs is captured by the [`ObjectStore`] trait so the
//! service layer can be exercised against a mock in tests.

pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use thiserror::Error;

pub use s3::S3Store;

/// One backend bucket, as reported by a bucket listing.
#[derive(Debug, Clone)]
pub struct BucketSummary {
    pub name: String,
}

/// One object key under a scanned bucket.
#[derive(Debug, Clone)]
pub struct ObjectSummary {
    pub key: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("error uploading object `{key}` to bucket `{bucket}`: {message}")]
    Put {
        bucket: String,
        key: String,
        message: String,
    },
    #[error("error listing buckets: {0}")]
    ListBuckets(String),
    #[error("error listing objects in bucket `{bucket}`: {message}")]
    ListObjects { bucket: String, message: String },
    #[error("{0}")]
    Presign(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations the gateway performs against the backend.
///
/// All calls are single synchronous round-trips from the gateway's point of
/// view; no retry or backoff happens at this layer.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key` in `bucket`, returning the byte count written.
    /// An existing object under the same key is silently overwritten.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StoreResult<u64>;

    /// Enumerate all buckets. Fully materialized; bucket counts are small.
    async fn list_buckets(&self) -> StoreResult<Vec<BucketSummary>>;

    /// Recursively enumerate every object key in `bucket`, at all nesting
    /// levels. An error partway through the enumeration discards anything
    /// collected so far and surfaces only the error.
    async fn list_objects(&self, bucket: &str) -> StoreResult<Vec<ObjectSummary>>;

    /// Request a time-limited signed GET URL for `bucket`/`key`.
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StoreResult<String>;
}
