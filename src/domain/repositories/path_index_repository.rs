//! # Path Index Repository Trait
//!
//! 移行済みパスの永続インデックスを抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::upload_record::UploadRecord;

/// パスインデックスリポジトリ
///
/// 「このローカルパスはこのバケットパスへ移行済み」という事実の
/// 保存と照会を担当する。両操作ともパスをインデックス列幅
/// （末尾255バイト）に切り詰めてから扱う。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PathIndexRepository: Send + Sync {
    /// レコードを登録する
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合、または影響行数が0件だった場合に
    /// エラーを返す
    async fn insert(&self, record: &UploadRecord) -> Result<()>;

    /// ローカルパスまたはバケットパスの一致するレコードを検索する
    ///
    /// # Returns
    ///
    /// 一致したレコードのリスト。空のリストは「未移行」を意味し、
    /// エラーではない。
    async fn find_by_either_path(
        &self,
        origin_path: &str,
        bucket_path: &str,
    ) -> Result<Vec<UploadRecord>>;
}
