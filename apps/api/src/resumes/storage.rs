use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3 error: {0}")]
    S3(String),
}

/// Object storage for uploaded resume files.
#[async_trait]
pub trait ResumeStorage: Send + Sync {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> Result<(), StorageError>;
}

/// S3 / MinIO backed resume storage. One bucket, write-only from this service.
#[derive(Clone)]
pub struct S3ResumeStorage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ResumeStorage {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ResumeStorage for S3ResumeStorage {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> Result<(), StorageError> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| StorageError::S3(DisplayErrorContext(&e).to_string()))?;

        info!("Uploaded {size} bytes to s3://{}/{key}", self.bucket);
        Ok(())
    }
}

/// Object key for a resume: `resumes/{userId}/{unixMillis}_{fileName}`.
/// Directory components in the client-supplied name are dropped.
pub fn resume_key(user_id: &str, file_name: &str, uploaded_at: DateTime<Utc>) -> String {
    let base_name = file_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .filter(|n| !n.is_empty())
        .unwrap_or("resume.pdf");
    format!(
        "resumes/{user_id}/{}_{base_name}",
        uploaded_at.timestamp_millis()
    )
}
