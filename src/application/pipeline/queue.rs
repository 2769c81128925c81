//! # Work Queue
//!
//! ウォーカーとワーカーを切り離す有界FIFOキュー
//!
//! 容量いっぱいのときは送信側がブロックする（バックプレッシャ）。
//! 送信側のドロップがクローズ信号であり、ワーカーは「キューが閉じて
//! 空になった」ことを `recv()` の `None` で観測して終了する。

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::Mutex;

/// 受信側が全て終了した後に送信しようとしたことを示すエラー
#[derive(Debug, thiserror::Error)]
#[error("work queue closed: all receivers are gone")]
pub struct QueueClosedError;

/// 指定した容量のワークキューを作成する
pub fn work_queue(capacity: usize) -> (WorkSender, WorkReceiver) {
    let (sender, receiver) = mpsc::channel(capacity);
    (
        WorkSender { inner: sender },
        WorkReceiver {
            inner: Arc::new(Mutex::new(receiver)),
        },
    )
}

/// キューの送信ハンドル（ウォーカーが保持する）
///
/// ドロップするとキューが閉じ、ワーカーへの終了信号になる。
pub struct WorkSender {
    inner: mpsc::Sender<String>,
}

impl WorkSender {
    /// パスを1件送信する。キューが満杯の間は待機する。
    pub async fn send(&self, origin_path: String) -> Result<(), QueueClosedError> {
        self.inner
            .send(origin_path)
            .await
            .map_err(|_| QueueClosedError)
    }

    /// 同期スレッドからパスを1件送信する。キューが満杯の間はブロックする。
    ///
    /// 非同期コンテキストから呼んではならない（ランタイムが停止する）。
    pub fn blocking_send(&self, origin_path: String) -> Result<(), QueueClosedError> {
        self.inner
            .blocking_send(origin_path)
            .map_err(|_| QueueClosedError)
    }
}

/// キューの受信ハンドル（各ワーカーへクローンして配る）
///
/// 複数のワーカーが同じキューを取り合う。ワーカー間の処理順序は
/// 保証されない。
#[derive(Clone)]
pub struct WorkReceiver {
    inner: Arc<Mutex<mpsc::Receiver<String>>>,
}

impl WorkReceiver {
    /// パスを1件受信する
    ///
    /// # Returns
    ///
    /// アイテムがあれば `Some(path)`。キューが閉じられ、かつ空に
    /// なった場合は `None`。
    pub async fn recv(&self) -> Option<String> {
        self.inner.lock().await.recv().await
    }
}
