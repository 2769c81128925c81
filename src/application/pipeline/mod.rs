//! # Migration Pipeline
//!
//! 移行パイプライン本体（コア）
//!
//! ## 構成要素
//!
//! - **counters**: プロセス全体の進捗カウンタ
//! - **queue**: 有界ワークキュー（バックプレッシャ付き）
//! - **walker**: ディレクトリツリーの再帰列挙（唯一のプロデューサ）
//! - **worker_pool**: キューを消費する固定数のワーカー
//! - **coordinator**: 全体の起動・待ち合わせ・集計
//!
//! データの流れ: walker → queue → worker_pool → (PathIndex, ObjectStore)

pub mod coordinator;
pub mod counters;
pub mod queue;
pub mod walker;
pub mod worker_pool;

pub use coordinator::{MigrationPipeline, PipelineSummary};
