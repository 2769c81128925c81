//! # Adapter Layer
//!
//! 外部システム（MySQL, GCS, ファイルシステム）との統合

pub mod auth;
pub mod config;
pub mod mysql;
pub mod repositories;
