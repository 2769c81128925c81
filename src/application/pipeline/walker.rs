//! # Tree Walker
//!
//! ディレクトリツリーを再帰的に列挙する唯一のプロデューサ

use std::sync::Arc;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::counters::MigrationCounters;
use super::queue::WorkSender;

/// ルート配下の通常ファイルを深さ優先で列挙し、キューへ送る
///
/// ファイルシステム走査はブロッキング処理なので
/// `tokio::task::spawn_blocking` 上で実行する。キューが満杯の間は
/// 送信でブロックする（バックプレッシャ）。シンボリックリンクは
/// 辿らず、通常ファイルのみを送出する。
///
/// # Errors
///
/// 読み取れないディレクトリに最初に出会った時点で走査全体を中断して
/// エラーを返す。送信側ハンドルはこの関数が返る際にドロップされ、
/// キューのクローズ（ワーカーへの終了信号）になる。
pub async fn walk_tree(
    root: String,
    sender: WorkSender,
    counters: Arc<MigrationCounters>,
) -> Result<()> {
    tokio::task::spawn_blocking(move || walk_tree_blocking(&root, &sender, &counters))
        .await
        .context("join walker task")?
}

fn walk_tree_blocking(
    root: &str,
    sender: &WorkSender,
    counters: &MigrationCounters,
) -> Result<()> {
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("dirwalk under {}", root))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let origin_path = entry.path().to_string_lossy().into_owned();
        sender
            .blocking_send(origin_path)
            .context("enqueue file path")?;
        counters.record_produced();
    }

    Ok(())
}
