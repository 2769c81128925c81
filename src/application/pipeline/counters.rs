//! # Pipeline Counters
//!
//! パイプライン全体の進捗カウンタ

use std::sync::atomic::{AtomicU64, Ordering};

/// 移行パイプラインのカウンタ
///
/// `produced` はウォーカーが発見したファイル数、`consumed` はワーカーが
/// 新規に移行したファイル数。複数タスクから同時に更新されるのはこの
/// 2値のみで、どちらもインクリメントしかしないためRelaxedで足りる。
/// Coordinatorが所有し、実行終了後に一度だけ読み出される。
#[derive(Debug, Default)]
pub struct MigrationCounters {
    produced: AtomicU64,
    consumed: AtomicU64,
}

impl MigrationCounters {
    /// 発見したファイルを1件数える
    pub fn record_produced(&self) {
        self.produced.fetch_add(1, Ordering::Relaxed);
    }

    /// 新規に移行したファイルを1件数える
    pub fn record_consumed(&self) {
        self.consumed.fetch_add(1, Ordering::Relaxed);
    }

    /// 発見したファイルの総数
    pub fn produced(&self) -> u64 {
        self.produced.load(Ordering::Relaxed)
    }

    /// 新規に移行したファイルの総数
    pub fn consumed(&self) -> u64 {
        self.consumed.load(Ordering::Relaxed)
    }
}
