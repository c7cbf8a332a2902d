//! 変換データ取得パイプライン
//!
//! 1. gRPCで変換データ取得（失敗したら即 `PipelineError::Generic`）
//! 2. ルックアップに変換
//! 3. ルックアップを差し替え
//! 4. 参照されている画像を並列取得
//!
//! ARセッションをリセットするたびに1回呼ぶ想定。
//! 同時に2回呼ばれた場合は内部のロックで直列化する。

use crate::client::{GrpcTransformationClient, PerCallChannel, TransformationClient};
use crate::config::Config;
use crate::diagnostics::DiagnosticsReporter;
use crate::error::{PipelineError, Result, ServiceError, TruffleError};
use crate::fetcher::{DecodedCardImage, HttpImageSource, ImageCache, ImageFetcher};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use truffle_common::{map_transformations, CardTransformation, ImageId, TransformationStore};

pub struct TransformationPipeline {
    client: Arc<dyn TransformationClient>,
    fetcher: ImageFetcher,
    store: RwLock<Arc<TransformationStore>>,
    refresh_lock: tokio::sync::Mutex<()>,
}

impl TransformationPipeline {
    pub fn new(client: Arc<dyn TransformationClient>, fetcher: ImageFetcher) -> Self {
        Self {
            client,
            fetcher,
            store: RwLock::new(Arc::new(TransformationStore::new())),
            refresh_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// 設定から組み立てる（チャネルは呼び出しごと、画像はHTTP + ディスクキャッシュ）
    pub fn from_config(config: &Config, diagnostics: Arc<dyn DiagnosticsReporter>) -> Result<Self> {
        let channels = Arc::new(PerCallChannel::from_config(config)?);
        let client = Arc::new(GrpcTransformationClient::new(channels, Arc::clone(&diagnostics)));

        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| TruffleError::Config(format!("HTTPクライアント生成エラー: {}", e)))?;
        let cache = ImageCache::new(config.image_cache_path()?);
        let source = Arc::new(HttpImageSource::new(http).with_cache(cache));

        Ok(Self::new(client, ImageFetcher::new(source, diagnostics)))
    }

    pub async fn refresh_transformations(
        &self,
        platform: &str,
    ) -> std::result::Result<Vec<DecodedCardImage>, PipelineError> {
        let never_cancelled = CancellationToken::new();
        self.refresh_transformations_cancellable(platform, &never_cancelled)
            .await
    }

    pub async fn refresh_transformations_cancellable(
        &self,
        platform: &str,
        cancel: &CancellationToken,
    ) -> std::result::Result<Vec<DecodedCardImage>, PipelineError> {
        let _single_flight = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
            guard = self.refresh_lock.lock() => guard,
        };

        tracing::info!(platform, "Refreshing card transformations");

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
            response = self.client.fetch_transformation_data(platform) => response,
        };
        let response = response.map_err(|err: ServiceError| {
            tracing::warn!(platform, "Transformation request failed");
            PipelineError::from(err)
        })?;

        let outcome = map_transformations(&response);
        for collision in &outcome.collisions {
            tracing::warn!(
                image_id = collision.image_id,
                replaced = collision.replaced_transformation_id,
                winner = collision.winning_transformation_id,
                "Duplicate image id across transformations, keeping the later one"
            );
        }

        let store = Arc::new(outcome.store);
        *self.store.write() = Arc::clone(&store);

        let card_images = store.card_images();
        tracing::info!(
            transformations = response.augmented_transformations.len(),
            images = card_images.len(),
            "Mapped card transformations"
        );

        let decoded = self
            .fetcher
            .fetch_all_cancellable(&card_images, cancel)
            .await?;

        if decoded.len() < card_images.len() {
            tracing::warn!(
                requested = card_images.len(),
                decoded = decoded.len(),
                "Some card images could not be fetched"
            );
        }

        Ok(decoded)
    }

    /// 画像IDに対応する変換設定（なければ None）
    pub fn lookup_transformation(&self, image_id: ImageId) -> Option<CardTransformation> {
        self.store.read().get(image_id).cloned()
    }

    /// 現在のルックアップのスナップショット
    pub fn store(&self) -> Arc<TransformationStore> {
        Arc::clone(&self.store.read())
    }
}
