//! # Domain Layer
//!
//! このモジュールは移行処理の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - MySQLやGCSについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（UploadRecordなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（リモートパス変換ルール）

pub mod entities;
pub mod repositories;
pub mod services;
