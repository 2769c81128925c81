//! # Pipeline Coordinator
//!
//! ウォーカーとワーカープールの起動・待ち合わせ・集計

use std::sync::Arc;

use log::error;

use crate::application::dto::migration_config::MigrationConfig;
use crate::application::use_cases::migrate_file::MigrateFileUseCase;
use crate::domain::repositories::object_storage_repository::ObjectStorageRepository;
use crate::domain::repositories::path_index_repository::PathIndexRepository;
use crate::domain::services::remote_path::RemotePathMapper;

use super::counters::MigrationCounters;
use super::queue::work_queue;
use super::walker::walk_tree;
use super::worker_pool::spawn_workers;

/// 実行1回分の集計結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    /// ウォーカーが発見したファイルの総数
    pub produced: u64,
    /// ワーカーが新規に移行したファイルの総数
    pub consumed: u64,
}

/// 移行パイプラインのCoordinator
///
/// ウォーカー1本とワーカー `N` 本を並行に起動し、全ワーカーの終了を
/// 待ってからカウンタを読み出す。PathIndexやObjectStoreには直接
/// 触れない。ディレクトリ走査の失敗はログに残るのみで、滞留済みの
/// アイテムは通常どおり処理される。
pub struct MigrationPipeline<P, O>
where
    P: PathIndexRepository + 'static,
    O: ObjectStorageRepository + 'static,
{
    config: MigrationConfig,
    migrate_file: Arc<MigrateFileUseCase<P, O>>,
}

impl<P, O> MigrationPipeline<P, O>
where
    P: PathIndexRepository + 'static,
    O: ObjectStorageRepository + 'static,
{
    /// 新しいパイプラインを組み立てる
    ///
    /// # Arguments
    ///
    /// * `config` - 移行設定（ルート・プレフィックス・ワーカー数）
    /// * `path_index` - パスインデックスリポジトリ
    /// * `object_storage` - オブジェクトストレージリポジトリ
    pub fn new(config: MigrationConfig, path_index: Arc<P>, object_storage: Arc<O>) -> Self {
        let mapper =
            RemotePathMapper::new(config.replace_prefix.clone(), config.bucket_prefix.clone());
        let migrate_file = Arc::new(MigrateFileUseCase::new(path_index, object_storage, mapper));

        Self {
            config,
            migrate_file,
        }
    }

    /// パイプラインを実行し、完了後の集計を返す
    ///
    /// ファイル単位の失敗があっても実行は常に完走し、集計を返す。
    pub async fn run(&self) -> PipelineSummary {
        let counters = Arc::new(MigrationCounters::default());
        let (sender, receiver) = work_queue(self.config.queue_capacity);

        let walker = {
            let root = self.config.local_path.clone();
            let counters = Arc::clone(&counters);
            tokio::spawn(async move {
                if let Err(e) = walk_tree(root, sender, counters).await {
                    error!("producer dir walk error: {:#}", e);
                }
            })
        };

        let workers = spawn_workers(
            self.config.worker_count,
            receiver,
            Arc::clone(&self.migrate_file),
            Arc::clone(&counters),
        );

        for worker in workers {
            if let Err(e) = worker.await {
                error!("worker task join error: {}", e);
            }
        }
        if let Err(e) = walker.await {
            error!("walker task join error: {}", e);
        }

        PipelineSummary {
            produced: counters.produced(),
            consumed: counters.consumed(),
        }
    }
}
