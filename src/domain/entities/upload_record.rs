//! # Upload Record Entity
//!
//! 移行済みファイルを表すインデックスレコード

/// インデックスのパス列の幅（バイト数）
///
/// MySQL側の `VARCHAR(255)` 列に合わせた固定幅。これより長いパスは
/// 末尾255バイトに切り詰めて保存・検索する（書き込みと読み出しで
/// 同一の切り詰めを適用しないと照合が一致しなくなる）。
pub const PATH_COLUMN_WIDTH: usize = 255;

/// 移行済みファイルのレコード
///
/// ワーカーがアップロード成功直後に一度だけ作成する。作成後に更新・
/// 削除されることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    /// ローカル側の絶対パス
    pub origin_path: String,
    /// バケット内のオブジェクトパス
    pub bucket_path: String,
}

impl UploadRecord {
    /// 新しいレコードを作成
    pub fn new(origin_path: impl Into<String>, bucket_path: impl Into<String>) -> Self {
        Self {
            origin_path: origin_path.into(),
            bucket_path: bucket_path.into(),
        }
    }
}

/// パスをインデックス列の幅に収まるよう末尾から切り出す
///
/// 列幅以下のパスはそのまま返す。切り詰め位置がUTF-8の文字境界を
/// 跨ぐ場合は次の境界まで前進する（結果が列幅を超えることはない）。
pub fn clamp_to_column_width(path: &str) -> &str {
    if path.len() <= PATH_COLUMN_WIDTH {
        return path;
    }
    let mut start = path.len() - PATH_COLUMN_WIDTH;
    while !path.is_char_boundary(start) {
        start += 1;
    }
    &path[start..]
}
