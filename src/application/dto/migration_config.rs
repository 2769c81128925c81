//! # Migration Configuration DTO
//!
//! 移行パイプラインに渡す設定のData Transfer Object

/// ワーカー数のデフォルト値
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// ワークキュー容量のデフォルト値
///
/// ウォーカーとワーカーが歩調を合わせずに済む程度のバッファ。
/// 正しさには影響しないチューニング値。
pub const DEFAULT_QUEUE_CAPACITY: usize = 100_000;

/// 移行パイプラインの設定
///
/// スキャン対象のルートディレクトリ、パス変換の設定、ワーカー数を
/// 保持する。Coordinatorが所有し、各コンポーネントへ引き渡す。
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// スキャン対象のルートディレクトリ
    pub local_path: String,
    /// ローカルパス側で置換するプレフィックス
    pub replace_prefix: String,
    /// バケット内プレフィックス
    pub bucket_prefix: String,
    /// 並行ワーカー数
    pub worker_count: usize,
    /// ワークキューの容量
    pub queue_capacity: usize,
}

impl MigrationConfig {
    /// 新しい移行設定を作成する
    ///
    /// `worker_count` が0以下の場合はデフォルト値（10）に強制される。
    pub fn new(
        local_path: impl Into<String>,
        replace_prefix: impl Into<String>,
        bucket_prefix: impl Into<String>,
        worker_count: i32,
    ) -> Self {
        let worker_count = if worker_count <= 0 {
            DEFAULT_WORKER_COUNT
        } else {
            worker_count as usize
        };

        Self {
            local_path: local_path.into(),
            replace_prefix: replace_prefix.into(),
            bucket_prefix: bucket_prefix.into(),
            worker_count,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// キュー容量を差し替える（テストおよびチューニング用）
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }
}
