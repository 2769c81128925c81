//! # MySQL Adapter
//!
//! パスインデックスを載せるMySQLへの接続とスキーマ管理

use anyhow::{Context, Result};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

/// `wp_uploads` テーブルのスキーマ
///
/// パス列はインデックス列幅（255）に合わせた固定幅。レコードは
/// 追記のみで、更新・削除は行われない。
const WP_UPLOADS_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS wp_uploads (
    id          BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
    origin_path VARCHAR(255)    NOT NULL,
    bucket_path VARCHAR(255)    NOT NULL,
    created_at  TIMESTAMP       NOT NULL DEFAULT CURRENT_TIMESTAMP,
    PRIMARY KEY (id),
    UNIQUE KEY idx_path (origin_path, bucket_path)
)";

/// 接続プールを作成する
///
/// 到達できない場合は起動前の致命的エラーとして扱う。
///
/// # Arguments
///
/// * `max_connections` - プールの最大接続数（通常はワーカー数に合わせる）
pub async fn connect(
    username: &str,
    password: &str,
    hostname: &str,
    port: u16,
    database: &str,
    max_connections: u32,
) -> Result<MySqlPool> {
    let options = MySqlConnectOptions::new()
        .host(hostname)
        .port(port)
        .username(username)
        .password(password)
        .database(database)
        .charset("utf8mb4");

    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("connect to MySQL at {}:{}/{}", hostname, port, database))?;

    Ok(pool)
}

/// `wp_uploads` テーブルがなければ作成する
pub async fn ensure_schema(pool: &MySqlPool) -> Result<()> {
    sqlx::query(WP_UPLOADS_SCHEMA)
        .execute(pool)
        .await
        .context("create wp_uploads table")?;
    Ok(())
}
