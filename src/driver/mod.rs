//! # Driver Layer (Presentation)
//!
//! CLIとワークフローの組み立てを提供
//!
//! ## 特徴
//!
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - パイプラインを起動し、結果を報告する
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::MigrationWorkflow;
