//! # Adapter Repositories
//!
//! Domain層のRepository traitに対する本番実装
//!
//! - **MysqlPathIndex**: PathIndexRepositoryのMySQL実装
//! - **GcsObjectStorage**: ObjectStorageRepositoryのGCS実装

pub mod gcs_object_storage;
pub mod mysql_path_index;
