//! # GCS Object Storage Repository Implementation
//!
//! ObjectStorageRepositoryのGCS実装

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use google_cloud_storage::client::Client;
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::domain::repositories::object_storage_repository::ObjectStorageRepository;

/// アップロード1回あたりの期限
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// GCS上のオブジェクトストレージ
///
/// ローカルファイルをストリーミングでアップロードする。
/// `if_generation_match: 0` の前提条件により、同じパスに既に
/// オブジェクトが存在する場合はリクエストが失敗する（上書きしない）。
pub struct GcsObjectStorage {
    client: Client,
    bucket: String,
}

impl GcsObjectStorage {
    /// 新しいリポジトリを作成
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl ObjectStorageRepository for GcsObjectStorage {
    async fn upload_file(&self, origin_path: &str, bucket_path: &str) -> Result<()> {
        let file = File::open(origin_path)
            .await
            .with_context(|| format!("open local file: {}", origin_path))?;
        let metadata = file
            .metadata()
            .await
            .with_context(|| format!("stat local file: {}", origin_path))?;

        let mut media = Media::new(bucket_path.to_string());
        media.content_length = Some(metadata.len());

        let request = UploadObjectRequest {
            bucket: self.bucket.clone(),
            // 同一ターゲットへの並行アップロード対策。オブジェクトが
            // 既に存在する場合はリクエストが中断される。
            if_generation_match: Some(0),
            ..Default::default()
        };

        let upload_type = UploadType::Simple(media);
        let upload = self.client.upload_streamed_object(
            &request,
            ReaderStream::new(file),
            &upload_type,
        );

        tokio::time::timeout(UPLOAD_TIMEOUT, upload)
            .await
            .with_context(|| format!("upload deadline exceeded: {}", origin_path))?
            .with_context(|| {
                format!("upload {} to gs://{}/{}", origin_path, self.bucket, bucket_path)
            })?;

        Ok(())
    }
}
