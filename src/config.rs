use crate::error::{Result, TruffleError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_API_HOST: &str = "api.trufflear.com";
const DEFAULT_API_PORT: u16 = 50051;
const DEFAULT_PLATFORM: &str = "iOS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub platform: String,
    /// false はローカル開発サーバー用（平文 http://）
    pub use_tls: bool,
    pub connect_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
    /// 画像キャッシュの場所（未指定時はOSのキャッシュディレクトリ）
    pub image_cache_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.into(),
            api_port: DEFAULT_API_PORT,
            platform: DEFAULT_PLATFORM.into(),
            use_tls: true,
            connect_timeout_seconds: 10,
            request_timeout_seconds: 30,
            image_cache_dir: None,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TruffleError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("truffle").join("config.json"))
    }

    /// 環境変数を優先
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("TRUFFLE_API_HOST") {
            if !host.trim().is_empty() {
                self.api_host = host.trim().to_string();
            }
        }

        if let Ok(port) = std::env::var("TRUFFLE_API_PORT") {
            self.api_port = port
                .trim()
                .parse()
                .map_err(|_| TruffleError::Config(format!("TRUFFLE_API_PORT が不正: {}", port)))?;
        }

        if let Ok(platform) = std::env::var("TRUFFLE_PLATFORM") {
            if !platform.trim().is_empty() {
                self.platform = platform.trim().to_string();
            }
        }

        Ok(())
    }

    /// gRPCエンドポイントURI
    pub fn endpoint_uri(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.api_host, self.api_port)
    }

    /// 画像キャッシュディレクトリ
    pub fn image_cache_path(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.image_cache_dir {
            return Ok(dir.clone());
        }
        let cache_root = dirs::cache_dir()
            .ok_or_else(|| TruffleError::Config("キャッシュディレクトリが見つかりません".into()))?;
        Ok(cache_root.join("truffle").join("images"))
    }
}
