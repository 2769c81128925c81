//! # Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::services::remote_path::DEFAULT_BUCKET_PREFIX;

fn default_bucket_prefix() -> String {
    DEFAULT_BUCKET_PREFIX.to_string()
}

/// アプリケーション設定
///
/// 設定ファイルが読めない場合は起動前の致命的エラーとして扱う。
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    // パスインデックス (MySQL)
    pub db_username: String,
    pub db_password: String,
    pub db_hostname: String,
    pub db_port: u16,
    pub db_name: String,

    // GCS
    pub bucket: String,
    pub service_account_key_path: String,

    // 移行対象
    pub local_path: String,
    pub replace_prefix_path: String,

    /// 並行ワーカー数。未設定または0以下なら10に強制される。
    #[serde(default)]
    pub worker_count: i32,

    /// バケット内プレフィックス
    #[serde(default = "default_bucket_prefix")]
    pub bucket_prefix: String,
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルが読めない場合、またはJSONとして不正な場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("parse config file: {}", path))?;
        Ok(config)
    }
}
