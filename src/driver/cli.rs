//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// ローカルのアップロードディレクトリをGCSへ移行するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "wpsync")]
#[command(about = "Migrate a local uploads tree to Google Cloud Storage", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./wpsync.json")]
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["wpsync"]);
        assert_eq!(args.config, "./wpsync.json");
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["wpsync", "-c", "/custom/config.json"]);
        assert_eq!(args.config, "/custom/config.json");
    }

    #[test]
    fn test_args_long_flag() {
        let args = Args::parse_from(["wpsync", "--config", "/etc/wpsync.json"]);
        assert_eq!(args.config, "/etc/wpsync.json");
    }
}
