//! # Worker Pool
//!
//! キューを消費する固定数のワーカー

use std::sync::Arc;

use log::{error, info};
use tokio::task::JoinHandle;

use crate::application::use_cases::migrate_file::{MigrateFileUseCase, MigrationOutcome};
use crate::domain::repositories::object_storage_repository::ObjectStorageRepository;
use crate::domain::repositories::path_index_repository::PathIndexRepository;

use super::counters::MigrationCounters;
use super::queue::WorkReceiver;

/// `count` 本のワーカータスクを起動する
///
/// 各ワーカーはキューが閉じて空になるまでファイル単位の移行
/// プロトコルを繰り返す。1件の失敗はそのファイルだけに閉じ、
/// ログに残して次のアイテムへ進む。
pub fn spawn_workers<P, O>(
    count: usize,
    receiver: WorkReceiver,
    migrate_file: Arc<MigrateFileUseCase<P, O>>,
    counters: Arc<MigrationCounters>,
) -> Vec<JoinHandle<()>>
where
    P: PathIndexRepository + 'static,
    O: ObjectStorageRepository + 'static,
{
    (0..count)
        .map(|id| {
            let receiver = receiver.clone();
            let migrate_file = Arc::clone(&migrate_file);
            let counters = Arc::clone(&counters);
            tokio::spawn(worker_loop(id, receiver, migrate_file, counters))
        })
        .collect()
}

async fn worker_loop<P, O>(
    id: usize,
    receiver: WorkReceiver,
    migrate_file: Arc<MigrateFileUseCase<P, O>>,
    counters: Arc<MigrationCounters>,
) where
    P: PathIndexRepository + 'static,
    O: ObjectStorageRepository + 'static,
{
    loop {
        let Some(origin_path) = receiver.recv().await else {
            info!("worker #{}: no more files to process, exiting", id);
            return;
        };

        match migrate_file.execute(&origin_path).await {
            Ok(MigrationOutcome::Uploaded { bucket_path }) => {
                counters.record_consumed();
                info!("done local {} to {} bucket", origin_path, bucket_path);
            }
            Ok(MigrationOutcome::AlreadyMigrated) => {}
            Err(e) => {
                // リトライはしない。再実行時に重複確認が拾い直す。
                error!("worker #{}: {:#}", id, e);
            }
        }
    }
}
