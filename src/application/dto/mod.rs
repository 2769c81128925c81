//! # Application DTOs
//!
//! レイヤー間で受け渡す設定値のData Transfer Object

pub mod migration_config;
