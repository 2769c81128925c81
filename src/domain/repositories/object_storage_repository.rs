//! # Object Storage Repository Trait
//!
//! オブジェクトストレージへのアップロードを抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// オブジェクトストレージリポジトリ
///
/// ローカルファイルをバケット内パスへストリーミングアップロードする。
/// 同じパスにオブジェクトが既に存在する場合は上書きせず失敗する
/// （同一ターゲットへの並行アップロード対策の前提条件）。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStorageRepository: Send + Sync {
    /// ローカルファイルをアップロードする
    ///
    /// # Arguments
    ///
    /// * `origin_path` - ローカル側のファイルパス
    /// * `bucket_path` - バケット内のオブジェクトパス
    ///
    /// # Errors
    ///
    /// ファイルが開けない場合、転送に失敗した場合、オブジェクトが
    /// 既に存在する場合、またはアップロード期限を超過した場合に
    /// エラーを返す
    async fn upload_file(&self, origin_path: &str, bucket_path: &str) -> Result<()>;
}
