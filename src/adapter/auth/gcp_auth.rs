//! # GCP Authentication
//!
//! Google Cloud Platform認証機能

use anyhow::{Context, Result};
use google_cloud_storage::client::{Client, ClientConfig};

/// Expands tilde in path and returns the full path
pub fn expand_key_path(key_path: &str) -> String {
    shellexpand::tilde(key_path).to_string()
}

/// Creates a GCS client with service account authentication
///
/// 認証に失敗した場合は起動前の致命的エラーとして扱う。
pub async fn create_storage_client(key_path: &str) -> Result<Client> {
    let expanded_path = expand_key_path(key_path);
    std::env::set_var("GOOGLE_APPLICATION_CREDENTIALS", &expanded_path);

    let config = ClientConfig::default()
        .with_auth()
        .await
        .context("Failed to authenticate with service account")?;

    Ok(Client::new(config))
}
