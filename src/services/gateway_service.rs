//! GatewayService — the core gateway operations over a remote object store:
//! bucket resolution, the upload pipeline, the URL-issuance strategy, and the
//! two listing pipelines. Holds no mutable state; bucket selection is strictly
//! request-scoped, so concurrent requests cannot observe each other's
//! overrides.

use crate::{
    models::access::AccessType,
    store::{ObjectStore, StoreResult},
};
use bytes::Bytes;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info};

/// Expiry carried by every signed link. Not caller-configurable.
pub const PRESIGN_TTL: Duration = Duration::from_secs(1000);

/// Content type recorded for every upload, independent of the actual file.
const UPLOAD_CONTENT_TYPE: &str = "application/octet-stream";

/// Outcome of a successful upload: the object key and bytes written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uploaded {
    pub key: String,
    pub size: u64,
}

#[derive(Clone)]
pub struct GatewayService {
    store: Arc<dyn ObjectStore>,
    /// Base of constructed public links, e.g. `http://localhost:9000`.
    endpoint: String,
    default_bucket: String,
}

impl GatewayService {
    pub fn new(store: Arc<dyn ObjectStore>, endpoint: String, default_bucket: String) -> Self {
        Self {
            store,
            endpoint,
            default_bucket,
        }
    }

    /// Resolve the effective bucket for one request: the override when present
    /// and non-empty, else the configured default. The override never leaks
    /// into other requests.
    fn bucket<'a>(&'a self, bucket_override: Option<&'a str>) -> &'a str {
        match bucket_override {
            Some(name) if !name.is_empty() => name,
            _ => &self.default_bucket,
        }
    }

    /// Write `data` under the submitted file name, verbatim. No sanitization,
    /// no uniqueness check: re-uploading a name overwrites the prior object.
    ///
    /// The payload arrives fully buffered; usable file size is bounded by
    /// memory. A store failure is a recoverable error for this request only.
    pub async fn upload(
        &self,
        file_name: &str,
        data: Bytes,
        bucket_override: Option<&str>,
    ) -> StoreResult<Uploaded> {
        let bucket = self.bucket(bucket_override);
        debug!(file_name, declared_size = data.len(), bucket, "uploading file");

        let size = self
            .store
            .put_object(bucket, file_name, data, UPLOAD_CONTENT_TYPE)
            .await?;

        info!(key = file_name, size, bucket, "upload complete");
        Ok(Uploaded {
            key: file_name.to_string(),
            size,
        })
    }

    /// Issue a retrieval URL for `key` under the chosen strategy.
    ///
    /// Public links are a deterministic string join with no network call and
    /// no verification that the object exists or that the bucket really is
    /// publicly readable. Signed links are one presign round-trip with the
    /// fixed [`PRESIGN_TTL`]; no retry.
    pub async fn resolve_access_url(
        &self,
        key: &str,
        access_type: AccessType,
        bucket_override: Option<&str>,
    ) -> StoreResult<String> {
        let bucket = self.bucket(bucket_override);
        match access_type {
            AccessType::Public => Ok(self.public_url(bucket, key)),
            AccessType::Signed => {
                let url = self.store.presign_get(bucket, key, PRESIGN_TTL).await?;
                debug!(key, bucket, "presigned URL created");
                Ok(url)
            }
        }
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, bucket, key)
    }

    /// Enumerate all buckets, fully materialized.
    pub async fn list_buckets(&self) -> StoreResult<Vec<String>> {
        let buckets = self.store.list_buckets().await?;
        Ok(buckets.into_iter().map(|b| b.name).collect())
    }

    /// Enumerate every object key in the effective bucket, recursively, into
    /// an ordered list. Fail-fast: an error partway through the enumeration
    /// surfaces alone, with no partial results.
    pub async fn list_objects(&self, bucket_override: Option<&str>) -> StoreResult<Vec<String>> {
        let bucket = self.bucket(bucket_override);
        let objects = self.store.list_objects(bucket).await?;
        Ok(objects.into_iter().map(|o| o.key).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BucketSummary, ObjectSummary, StoreError, StoreResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every call and replays canned results.
    #[derive(Default)]
    struct MockStore {
        puts: Mutex<Vec<(String, String, Bytes, String)>>,
        presigns: Mutex<Vec<(String, String, Duration)>>,
        listed_buckets: Mutex<Vec<String>>,
        fail_put: bool,
        fail_list_objects: bool,
        objects: Vec<String>,
        buckets: Vec<String>,
    }

    #[async_trait]
    impl ObjectStore for MockStore {
        async fn put_object(
            &self,
            bucket: &str,
            key: &str,
            data: Bytes,
            content_type: &str,
        ) -> StoreResult<u64> {
            if self.fail_put {
                return Err(StoreError::Put {
                    bucket: bucket.into(),
                    key: key.into(),
                    message: "connection refused".into(),
                });
            }
            let size = data.len() as u64;
            self.puts.lock().unwrap().push((
                bucket.into(),
                key.into(),
                data,
                content_type.into(),
            ));
            Ok(size)
        }

        async fn list_buckets(&self) -> StoreResult<Vec<BucketSummary>> {
            Ok(self
                .buckets
                .iter()
                .map(|name| BucketSummary { name: name.clone() })
                .collect())
        }

        async fn list_objects(&self, bucket: &str) -> StoreResult<Vec<ObjectSummary>> {
            self.listed_buckets.lock().unwrap().push(bucket.into());
            if self.fail_list_objects {
                return Err(StoreError::ListObjects {
                    bucket: bucket.into(),
                    message: "access denied".into(),
                });
            }
            Ok(self
                .objects
                .iter()
                .map(|key| ObjectSummary { key: key.clone() })
                .collect())
        }

        async fn presign_get(
            &self,
            bucket: &str,
            key: &str,
            expires_in: Duration,
        ) -> StoreResult<String> {
            self.presigns
                .lock()
                .unwrap()
                .push((bucket.into(), key.into(), expires_in));
            Ok(format!(
                "http://store.local/{}/{}?X-Amz-Expires={}",
                bucket,
                key,
                expires_in.as_secs()
            ))
        }
    }

    fn service_with(store: MockStore) -> (GatewayService, Arc<MockStore>) {
        let store = Arc::new(store);
        let service = GatewayService::new(
            store.clone(),
            "http://store.local".into(),
            "default-bucket".into(),
        );
        (service, store)
    }

    #[tokio::test]
    async fn upload_uses_file_name_as_key_and_echoes_size() {
        let (service, store) = service_with(MockStore::default());

        let uploaded = service
            .upload("a.png", Bytes::from_static(b"0123456789"), None)
            .await
            .unwrap();

        assert_eq!(uploaded.key, "a.png");
        assert_eq!(uploaded.size, 10);

        let puts = store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        let (bucket, key, _, content_type) = &puts[0];
        assert_eq!(bucket, "default-bucket");
        assert_eq!(key, "a.png");
        assert_eq!(content_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn upload_store_failure_is_recoverable() {
        let (service, _) = service_with(MockStore {
            fail_put: true,
            ..Default::default()
        });

        let err = service
            .upload("a.png", Bytes::from_static(b"x"), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection refused"));

        // The service keeps serving after a failed upload.
        assert!(service.list_buckets().await.is_ok());
    }

    #[tokio::test]
    async fn public_url_is_deterministic_join() {
        let (service, store) = service_with(MockStore::default());

        let url = service
            .resolve_access_url("a.png", AccessType::Public, None)
            .await
            .unwrap();

        assert_eq!(url, "http://store.local/default-bucket/a.png");
        // No network call on the public path.
        assert!(store.presigns.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn signed_url_carries_fixed_ttl() {
        let (service, store) = service_with(MockStore::default());

        service
            .resolve_access_url("a.png", AccessType::Signed, None)
            .await
            .unwrap();

        let presigns = store.presigns.lock().unwrap();
        assert_eq!(presigns.len(), 1);
        assert_eq!(presigns[0].2, Duration::from_secs(1000));
    }

    #[tokio::test]
    async fn bucket_override_is_request_scoped() {
        let (service, store) = service_with(MockStore::default());

        // R1 supplies an override...
        service.list_objects(Some("other-bucket")).await.unwrap();
        // ...and R2 without one is unaffected.
        service.list_objects(None).await.unwrap();
        // An empty override behaves like no override.
        service.list_objects(Some("")).await.unwrap();

        let listed = store.listed_buckets.lock().unwrap();
        assert_eq!(
            *listed,
            vec!["other-bucket", "default-bucket", "default-bucket"]
        );
    }

    #[tokio::test]
    async fn listing_empty_bucket_is_empty_not_error() {
        let (service, _) = service_with(MockStore::default());

        let objects = service.list_objects(None).await.unwrap();
        assert!(objects.is_empty());
    }

    #[tokio::test]
    async fn listing_error_returns_no_partial_results() {
        let (service, _) = service_with(MockStore {
            fail_list_objects: true,
            objects: vec!["collected-before-error.txt".into()],
            ..Default::default()
        });

        let err = service.list_objects(None).await.unwrap_err();
        assert!(err.to_string().contains("access denied"));
    }

    #[tokio::test]
    async fn list_buckets_returns_names() {
        let (service, _) = service_with(MockStore {
            buckets: vec!["alpha".into(), "beta".into()],
            ..Default::default()
        });

        assert_eq!(service.list_buckets().await.unwrap(), vec!["alpha", "beta"]);
    }
}
