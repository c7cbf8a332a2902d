//! 変換データ取得クライアント
//!
//! 1回の呼び出し = チャネル1本 + 単項RPC 1回。
//! エラーは診断レポートに送ったうえで `ServiceError::Generic` に畳み込む。

mod channel;

pub use channel::{ChannelLease, ChannelProvider, PerCallChannel};

use crate::diagnostics::DiagnosticsReporter;
use crate::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use truffle_protos::card_transformation_client::CardTransformationClient;
use truffle_protos::{GetCardTransformationDataRequest, GetCardTransformationDataResponse};

const DIAGNOSTICS_CONTEXT: &str = "transformation_client";

#[async_trait]
pub trait TransformationClient: Send + Sync {
    async fn fetch_transformation_data(
        &self,
        platform: &str,
    ) -> Result<GetCardTransformationDataResponse, ServiceError>;
}

/// tonic::Status のメッセージを読みやすくするラッパー
#[derive(Debug)]
struct TonicStatusError(tonic::Status);

impl std::fmt::Display for TonicStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = &self.0;
        write!(f, "gRPC error, status: '{}'", status.code())?;
        if !status.message().is_empty() {
            write!(f, ", message: {:?}", status.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for TonicStatusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.0)
    }
}

#[derive(thiserror::Error, Debug)]
enum RequestError {
    #[error("接続エラー: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error(transparent)]
    Status(#[from] TonicStatusError),
}

pub struct GrpcTransformationClient {
    channels: Arc<dyn ChannelProvider>,
    diagnostics: Arc<dyn DiagnosticsReporter>,
}

impl GrpcTransformationClient {
    pub fn new(channels: Arc<dyn ChannelProvider>, diagnostics: Arc<dyn DiagnosticsReporter>) -> Self {
        Self { channels, diagnostics }
    }

    async fn request(&self, platform: &str) -> Result<GetCardTransformationDataResponse, RequestError> {
        let lease = ChannelLease::acquire(&*self.channels).await?;
        let mut client = CardTransformationClient::new(lease.channel());

        let request = GetCardTransformationDataRequest {
            platform: platform.to_string(),
        };

        let response = client
            .get_card_transformation_data(request)
            .await
            .map_err(TonicStatusError)?;

        Ok(response.into_inner())
    }
}

#[async_trait]
impl TransformationClient for GrpcTransformationClient {
    async fn fetch_transformation_data(
        &self,
        platform: &str,
    ) -> Result<GetCardTransformationDataResponse, ServiceError> {
        match self.request(platform).await {
            Ok(response) => {
                tracing::debug!(
                    platform,
                    groups = response.augmented_transformations.len(),
                    "Received transformation data"
                );
                Ok(response)
            }
            Err(err) => {
                self.diagnostics.notify_error(DIAGNOSTICS_CONTEXT, &err);
                Err(ServiceError::Generic)
            }
        }
    }
}
