//! # Wpsync
//!
//! ローカルのアップロードディレクトリツリーをGCSバケットへ一度だけ移行するツール
//!
//! 転送済みファイルはMySQL上のインデックスに記録され、再実行は冪等になります
//! （記録済みのファイルは再アップロードされません）。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: ビジネスの核心的なルールとエンティティ（外部依存なし）
//! - **Application層**: アプリケーション固有のビジネスフロー（パイプラインとユースケース）
//! - **Adapter層**: 外部システムとの統合（MySQL, GCS等）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケースとパイプライン）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
