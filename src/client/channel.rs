//! gRPCチャネルの取得と返却
//!
//! 呼び出しごとに `ChannelLease` でチャネルを借り、スコープを抜けたら
//! （成功でもエラーでも）必ず `ChannelProvider::release` に返す。
//! プール実装はこのトレイトを差し替えるだけでよい。

use crate::config::Config;
use crate::error::{Result, TruffleError};
use async_trait::async_trait;
use std::time::Duration;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

#[async_trait]
pub trait ChannelProvider: Send + Sync {
    async fn acquire(&self) -> std::result::Result<Channel, tonic::transport::Error>;

    /// デフォルトは破棄（= 接続を閉じる）
    fn release(&self, channel: Channel) {
        drop(channel);
    }
}

/// 呼び出しごとに新しい接続を張るプロバイダ（プールなし）
#[derive(Debug, Clone)]
pub struct PerCallChannel {
    endpoint: Endpoint,
}

impl PerCallChannel {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let uri = config.endpoint_uri();
        let mut endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| TruffleError::InvalidEndpoint(format!("{}: {}", uri, e)))?
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds));

        if config.use_tls {
            let tls = ClientTlsConfig::new()
                .with_webpki_roots()
                .domain_name(config.api_host.clone());
            endpoint = endpoint
                .tls_config(tls)
                .map_err(|e| TruffleError::InvalidEndpoint(format!("{}: {}", uri, e)))?;
        }

        Ok(Self::new(endpoint))
    }

    pub fn uri(&self) -> String {
        self.endpoint.uri().to_string()
    }
}

#[async_trait]
impl ChannelProvider for PerCallChannel {
    async fn acquire(&self) -> std::result::Result<Channel, tonic::transport::Error> {
        tracing::debug!("Connecting to {}…", self.endpoint.uri());
        self.endpoint.connect().await
    }

    fn release(&self, channel: Channel) {
        tracing::debug!("Closing channel to {}", self.endpoint.uri());
        drop(channel);
    }
}

/// 借りているチャネル。Dropで返却する。
pub struct ChannelLease<'a> {
    provider: &'a dyn ChannelProvider,
    channel: Channel,
}

impl<'a> ChannelLease<'a> {
    pub async fn acquire(
        provider: &'a dyn ChannelProvider,
    ) -> std::result::Result<Self, tonic::transport::Error> {
        let channel = provider.acquire().await?;
        Ok(Self { provider, channel })
    }

    /// `Channel` のクローンは同じ接続を共有する
    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }
}

impl Drop for ChannelLease<'_> {
    fn drop(&mut self) {
        self.provider.release(self.channel.clone());
    }
}
