//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **MigrateFileUseCase**: ファイル1件の移行プロトコル
//!   （重複確認 → アップロード → 記録）

pub mod migrate_file;
