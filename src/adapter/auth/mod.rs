//! # Authentication Adapters
//!
//! GCP認証

pub mod gcp_auth;
