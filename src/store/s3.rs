//! aws-sdk-s3 implementation of [`ObjectStore`].
//!
//! Speaks to any S3-compatible endpoint (MinIO included) using static
//! credentials, a custom endpoint URL, and path-style addressing.

use crate::store::{BucketSummary, ObjectStore, ObjectSummary, StoreError, StoreResult};
use async_trait::async_trait;
use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    error::DisplayErrorContext,
    presigning::PresigningConfig,
    primitives::ByteStream,
};
use bytes::Bytes;
use std::time::Duration;

#[derive(Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Build a client for the configured endpoint with static credentials.
    ///
    /// `force_path_style` keeps bucket names in the URL path, which MinIO
    /// requires and which matches the public-URL shape the gateway constructs.
    pub fn new(
        endpoint: &str,
        region: &str,
        access_key_id: &str,
        secret_access_key: &str,
        force_path_style: bool,
    ) -> Self {
        let credentials =
            Credentials::new(access_key_id, secret_access_key, None, None, "static");
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .endpoint_url(endpoint)
            .force_path_style(force_path_style)
            .credentials_provider(credentials)
            .build();

        Self {
            client: Client::from_conf(config),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StoreResult<u64> {
        let size = data.len() as u64;
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|err| StoreError::Put {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        tracing::debug!(bucket, key, size, "object stored");
        Ok(size)
    }

    async fn list_buckets(&self) -> StoreResult<Vec<BucketSummary>> {
        let resp = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|err| StoreError::ListBuckets(DisplayErrorContext(&err).to_string()))?;

        Ok(resp
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(|name| BucketSummary { name: name.into() }))
            .collect())
    }

    async fn list_objects(&self, bucket: &str) -> StoreResult<Vec<ObjectSummary>> {
        // Recursive scan: no prefix, no delimiter, so keys at every nesting
        // level come back. The paginator is drained fail-fast; a page error
        // throws away whatever was collected before it.
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .into_paginator()
            .send();

        let mut objects = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| StoreError::ListObjects {
                bucket: bucket.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;
            for obj in page.contents() {
                if let Some(key) = obj.key() {
                    objects.push(ObjectSummary { key: key.into() });
                }
            }
        }

        Ok(objects)
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StoreResult<String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|err| StoreError::Presign(err.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|err| StoreError::Presign(DisplayErrorContext(&err).to_string()))?;

        Ok(presigned.uri().to_string())
    }
}
