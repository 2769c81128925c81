//! # Remote Path Mapping
//!
//! ローカルパスからバケット内オブジェクトパスへの変換ルール

/// バケット内プレフィックスのデフォルト値
pub const DEFAULT_BUCKET_PREFIX: &str = "wp-content/uploads/";

/// ローカルパスをバケット内パスへ変換するマッパー
///
/// 設定されたプレフィックスの最初の出現箇所をバケット内プレフィックスに
/// 置換する。構造的なパス前置一致ではなく、単純な文字列置換であることに
/// 注意。プレフィックスがパス中に現れない場合は入力をそのまま返す
/// （エラーにはしない）。
#[derive(Debug, Clone)]
pub struct RemotePathMapper {
    replace_prefix: String,
    bucket_prefix: String,
}

impl RemotePathMapper {
    /// 新しいマッパーを作成
    ///
    /// # Arguments
    ///
    /// * `replace_prefix` - ローカルパス側で置換対象となるプレフィックス
    /// * `bucket_prefix` - 置換後のバケット内プレフィックス
    pub fn new(replace_prefix: impl Into<String>, bucket_prefix: impl Into<String>) -> Self {
        Self {
            replace_prefix: replace_prefix.into(),
            bucket_prefix: bucket_prefix.into(),
        }
    }

    /// ローカルパスをバケット内パスへ変換する
    ///
    /// 最初の出現箇所のみ置換する。
    pub fn map(&self, origin_path: &str) -> String {
        origin_path.replacen(&self.replace_prefix, &self.bucket_prefix, 1)
    }
}
