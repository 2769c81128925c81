//! # Migrate File Use Case
//!
//! ファイル1件の移行ユースケース

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::entities::upload_record::UploadRecord;
use crate::domain::repositories::object_storage_repository::ObjectStorageRepository;
use crate::domain::repositories::path_index_repository::PathIndexRepository;
use crate::domain::services::remote_path::RemotePathMapper;

/// ファイル1件の移行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// 新規にアップロードして記録した
    Uploaded {
        /// アップロード先のバケット内パス
        bucket_path: String,
    },
    /// インデックスに記録済みのためスキップした
    AlreadyMigrated,
}

/// ファイル移行ユースケース
///
/// ローカルパス1件に対して「重複確認 → アップロード → 記録」の
/// プロトコルを実行する。途中のどの失敗もこのファイルだけに閉じ、
/// 呼び出し側（ワーカー）はエラーをログに残して次のファイルへ進む。
pub struct MigrateFileUseCase<P: PathIndexRepository, O: ObjectStorageRepository> {
    path_index: Arc<P>,
    object_storage: Arc<O>,
    mapper: RemotePathMapper,
}

impl<P: PathIndexRepository, O: ObjectStorageRepository> MigrateFileUseCase<P, O> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `path_index` - パスインデックスリポジトリ
    /// * `object_storage` - オブジェクトストレージリポジトリ
    /// * `mapper` - リモートパス変換サービス
    pub fn new(path_index: Arc<P>, object_storage: Arc<O>, mapper: RemotePathMapper) -> Self {
        Self {
            path_index,
            object_storage,
            mapper,
        }
    }

    /// ローカルファイル1件を移行する
    ///
    /// # Returns
    ///
    /// 新規アップロードなら `Uploaded`、インデックスに既存レコードが
    /// あれば `AlreadyMigrated`
    ///
    /// # Errors
    ///
    /// 重複確認・アップロード・記録のいずれかに失敗した場合にエラーを
    /// 返す。アップロード成功後に記録が失敗した場合、オブジェクトは
    /// 残るがレコードは存在しない。次回実行時は上書き拒否の前提条件に
    /// より再アップロードが安全に失敗する。
    pub async fn execute(&self, origin_path: &str) -> Result<MigrationOutcome> {
        let bucket_path = self.mapper.map(origin_path);

        let existing = self
            .path_index
            .find_by_either_path(origin_path, &bucket_path)
            .await
            .with_context(|| format!("select {} or {} from index", origin_path, bucket_path))?;

        if !existing.is_empty() {
            return Ok(MigrationOutcome::AlreadyMigrated);
        }

        self.object_storage
            .upload_file(origin_path, &bucket_path)
            .await
            .with_context(|| format!("upload local {} to {} bucket", origin_path, bucket_path))?;

        self.path_index
            .insert(&UploadRecord::new(origin_path, bucket_path.clone()))
            .await
            .with_context(|| format!("insert {} into index", bucket_path))?;

        Ok(MigrationOutcome::Uploaded { bucket_path })
    }
}
