//! # MySQL Path Index Repository Implementation
//!
//! PathIndexRepositoryのMySQL実装

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::mysql::MySqlPool;

use crate::domain::entities::upload_record::{clamp_to_column_width, UploadRecord};
use crate::domain::repositories::path_index_repository::PathIndexRepository;

/// MySQL上のパスインデックス
///
/// 書き込み・読み出しの双方でパスをインデックス列幅に切り詰める。
/// どちらか片側だけ切り詰めると照合が永遠に一致しなくなる。
pub struct MysqlPathIndex {
    pool: MySqlPool,
}

impl MysqlPathIndex {
    /// 新しいリポジトリを作成
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UploadRecordRow {
    origin_path: String,
    bucket_path: String,
}

impl From<UploadRecordRow> for UploadRecord {
    fn from(row: UploadRecordRow) -> Self {
        UploadRecord::new(row.origin_path, row.bucket_path)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl PathIndexRepository for MysqlPathIndex {
    async fn insert(&self, record: &UploadRecord) -> Result<()> {
        let origin_path = clamp_to_column_width(&record.origin_path);
        let bucket_path = clamp_to_column_width(&record.bucket_path);

        let result = sqlx::query("INSERT INTO wp_uploads (origin_path, bucket_path) VALUES (?, ?)")
            .bind(origin_path)
            .bind(bucket_path)
            .execute(&self.pool)
            .await
            .context("insert into wp_uploads")?;

        if result.rows_affected() == 0 {
            bail!("insert error, rows affected = 0");
        }

        Ok(())
    }

    async fn find_by_either_path(
        &self,
        origin_path: &str,
        bucket_path: &str,
    ) -> Result<Vec<UploadRecord>> {
        let origin_path = clamp_to_column_width(origin_path);
        let bucket_path = clamp_to_column_width(bucket_path);

        let rows = sqlx::query_as::<_, UploadRecordRow>(
            "SELECT origin_path, bucket_path FROM wp_uploads \
             WHERE origin_path = ? OR bucket_path = ? LIMIT 1",
        )
        .bind(origin_path)
        .bind(bucket_path)
        .fetch_all(&self.pool)
        .await
        .context("select from wp_uploads")?;

        Ok(rows.into_iter().map(UploadRecord::from).collect())
    }
}
