//! カード画像の並列取得
//!
//! 画像1枚につきタスク1つを `JoinSet` で起動し、全タスクの完了を待つ。
//! 1枚の失敗（取得・デコード・パニック）は診断レポートに送って結果から外すだけで、
//! 他のタスクには影響しない。結果の順序は保証しない。

pub mod cache;
mod source;

pub use cache::ImageCache;
pub use source::{HttpImageSource, ImageSource, RetrievedImage};

use crate::diagnostics::DiagnosticsReporter;
use crate::error::{Cancelled, FetchError};
use image::DynamicImage;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use truffle_common::{CardImage, ImageId, Size};

const DIAGNOSTICS_CONTEXT: &str = "image_fetcher";

/// デコード済みのカード画像（ARトラッキング対象として登録する）
#[derive(Debug, Clone)]
pub struct DecodedCardImage {
    pub image_id: ImageId,
    pub bitmap: DynamicImage,
    pub image_name: String,
    pub physical_size: Size,
}

#[derive(Debug, thiserror::Error)]
#[error("画像 {image_id} の取得に失敗: {source}")]
struct ImageFailure {
    image_id: ImageId,
    #[source]
    source: FetchError,
}

#[derive(Clone)]
pub struct ImageFetcher {
    source: Arc<dyn ImageSource>,
    diagnostics: Arc<dyn DiagnosticsReporter>,
}

impl ImageFetcher {
    pub fn new(source: Arc<dyn ImageSource>, diagnostics: Arc<dyn DiagnosticsReporter>) -> Self {
        Self { source, diagnostics }
    }

    /// 全画像を取得（キャンセルなし）
    pub async fn fetch_all(&self, images: &[CardImage]) -> Vec<DecodedCardImage> {
        let never_cancelled = CancellationToken::new();
        self.fetch_all_cancellable(images, &never_cancelled)
            .await
            .unwrap_or_default()
    }

    /// 全画像を取得。`cancel` が発火したら残りのタスクを中断して `Cancelled` を返す
    pub async fn fetch_all_cancellable(
        &self,
        images: &[CardImage],
        cancel: &CancellationToken,
    ) -> Result<Vec<DecodedCardImage>, Cancelled> {
        let mut tasks = JoinSet::new();
        for card_image in images.iter().cloned() {
            let source = Arc::clone(&self.source);
            tasks.spawn(async move {
                let result = fetch_one(source.as_ref(), &card_image).await;
                (card_image.image_id, result)
            });
        }

        let mut decoded = Vec::with_capacity(images.len());
        loop {
            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(pending = tasks.len(), "Image fetch cancelled");
                    tasks.abort_all();
                    return Err(Cancelled);
                }
                joined = tasks.join_next() => joined,
            };

            let Some(joined) = joined else {
                break;
            };

            match joined {
                Ok((_, Ok(image))) => decoded.push(image),
                Ok((image_id, Err(source))) => {
                    self.report(ImageFailure { image_id, source });
                }
                Err(join_err) => {
                    // パニックしたタスクはIDが取れない
                    let err = FetchError::Task(join_err.to_string());
                    self.diagnostics.notify_error(DIAGNOSTICS_CONTEXT, &err);
                }
            }
        }

        tracing::debug!(requested = images.len(), decoded = decoded.len(), "Image fetch finished");
        Ok(decoded)
    }

    fn report(&self, failure: ImageFailure) {
        tracing::warn!(image_id = failure.image_id, "Dropping image: {}", failure.source);
        self.diagnostics.notify_error(DIAGNOSTICS_CONTEXT, &failure);
    }
}

async fn fetch_one(
    source: &dyn ImageSource,
    card_image: &CardImage,
) -> Result<DecodedCardImage, FetchError> {
    let RetrievedImage { bytes, from_cache } = source.retrieve(card_image).await?;

    // デコードはCPUバウンドなのでブロッキングプールで
    let (bytes, decoded) = tokio::task::spawn_blocking(move || {
        let decoded = image::load_from_memory(&bytes);
        (bytes, decoded)
    })
    .await
    .map_err(|e| FetchError::Task(e.to_string()))?;

    // キャッシュに入れるのはデコードできたダウンロードだけ
    let bitmap = match decoded {
        Ok(bitmap) => {
            if !from_cache {
                source.commit(card_image, &bytes).await;
            }
            bitmap
        }
        Err(e) => {
            if from_cache {
                source.evict(card_image).await;
            }
            return Err(e.into());
        }
    };

    Ok(DecodedCardImage {
        image_id: card_image.image_id,
        bitmap,
        image_name: card_image.image_name.clone(),
        physical_size: card_image.physical_size,
    })
}
