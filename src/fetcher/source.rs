//! 画像バイト列の取得元

use super::cache::ImageCache;
use crate::error::FetchError;
use async_trait::async_trait;
use truffle_common::CardImage;

/// 取得したバイト列（まだデコードしていない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedImage {
    pub bytes: Vec<u8>,
    pub from_cache: bool,
}

impl RetrievedImage {
    pub fn downloaded(bytes: Vec<u8>) -> Self {
        Self { bytes, from_cache: false }
    }

    pub fn cached(bytes: Vec<u8>) -> Self {
        Self { bytes, from_cache: true }
    }
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn retrieve(&self, image: &CardImage) -> Result<RetrievedImage, FetchError>;

    /// デコードできたダウンロードを保存する
    async fn commit(&self, _image: &CardImage, _bytes: &[u8]) {}

    /// デコードできなかったキャッシュを捨てる
    async fn evict(&self, _image: &CardImage) {}
}

/// HTTPS GET + ディスクキャッシュ
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: reqwest::Client,
    cache: Option<ImageCache>,
}

impl HttpImageSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client, cache: None }
    }

    pub fn with_cache(mut self, cache: ImageCache) -> Self {
        self.cache = Some(cache);
        self
    }

    async fn download(&self, image: &CardImage) -> Result<Vec<u8>, FetchError> {
        let url = reqwest::Url::parse(&image.image_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{} ({})", image.image_url, e)))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: image.image_url.clone(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn retrieve(&self, image: &CardImage) -> Result<RetrievedImage, FetchError> {
        if let Some(cache) = &self.cache {
            if let Some(bytes) = cache.get(image).await {
                tracing::debug!(image_id = image.image_id, "Image cache hit");
                return Ok(RetrievedImage::cached(bytes));
            }
        }

        let bytes = self.download(image).await?;
        tracing::debug!(image_id = image.image_id, bytes = bytes.len(), "Downloaded image");
        Ok(RetrievedImage::downloaded(bytes))
    }

    async fn commit(&self, image: &CardImage, bytes: &[u8]) {
        let Some(cache) = &self.cache else {
            return;
        };
        // キャッシュ書き込み失敗は取得失敗にしない
        if let Err(e) = cache.insert(image, bytes).await {
            tracing::warn!(image_id = image.image_id, "Failed to write image cache: {}", e);
        }
    }

    async fn evict(&self, image: &CardImage) {
        let Some(cache) = &self.cache else {
            return;
        };
        match cache.remove(image).await {
            Ok(()) => tracing::debug!(image_id = image.image_id, "Evicted undecodable cache entry"),
            Err(e) => {
                tracing::warn!(image_id = image.image_id, "Failed to evict image cache: {}", e)
            }
        }
    }
}
