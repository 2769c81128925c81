//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::auth::gcp_auth;
use crate::adapter::config::Config;
use crate::adapter::mysql;
use crate::adapter::repositories::gcs_object_storage::GcsObjectStorage;
use crate::adapter::repositories::mysql_path_index::MysqlPathIndex;
use crate::application::dto::migration_config::MigrationConfig;
use crate::application::pipeline::MigrationPipeline;

/// Migration Workflow
///
/// 設定からMySQL・GCSのアダプタを組み立て、移行パイプラインを実行する。
/// PathIndexに到達できない、または認証に失敗した場合は移行を始める前に
/// エラーで終了する。
pub struct MigrationWorkflow {
    config: Config,
}

impl MigrationWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the migration workflow
    pub async fn execute(&self) -> Result<()> {
        info!("Starting uploads migration...");

        let local_path = shellexpand::tilde(&self.config.local_path).to_string();
        let migration = MigrationConfig::new(
            local_path,
            self.config.replace_prefix_path.clone(),
            self.config.bucket_prefix.clone(),
            self.config.worker_count,
        );

        println!("✓ Using configuration:");
        println!(
            "  Index: {}@{}:{}/{}",
            self.config.db_username,
            self.config.db_hostname,
            self.config.db_port,
            self.config.db_name
        );
        println!("  Bucket: {}", self.config.bucket);
        println!("  Local path: {}", migration.local_path);
        println!("  Workers: {}", migration.worker_count);

        // パスインデックスへ接続（失敗は致命的エラー）
        let pool = mysql::connect(
            &self.config.db_username,
            &self.config.db_password,
            &self.config.db_hostname,
            self.config.db_port,
            &self.config.db_name,
            migration.worker_count as u32,
        )
        .await?;
        mysql::ensure_schema(&pool).await?;
        println!("✓ Connected to path index database");

        let storage_client =
            gcp_auth::create_storage_client(&self.config.service_account_key_path).await?;
        println!("✓ Created GCS client");

        let path_index = Arc::new(MysqlPathIndex::new(pool));
        let object_storage = Arc::new(GcsObjectStorage::new(
            storage_client,
            self.config.bucket.clone(),
        ));

        let pipeline = MigrationPipeline::new(migration, path_index, object_storage);
        let summary = pipeline.run().await;

        println!(
            "✓ Migration finished: {} files discovered, {} files newly uploaded",
            summary.produced, summary.consumed
        );
        info!(
            "Total files: {}, consumer total files: {}",
            summary.produced, summary.consumed
        );

        Ok(())
    }
}
