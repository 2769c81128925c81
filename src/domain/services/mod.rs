//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! ## サービス
//!
//! - **RemotePathMapper**: ローカルパスからバケット内パスへの変換

pub mod remote_path;
