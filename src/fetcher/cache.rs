//! 画像キャッシュモジュール
//!
//! 画像IDをキーにダウンロード済みのバイト列をディスクに置き、
//! 次回の取得でネットワークを使わないようにする。
//! ファイル名にURLのハッシュを含めるので、同じIDでもURLが変われば取り直す。

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use truffle_common::{CardImage, ImageId};

const CACHE_FILE_EXTENSION: &str = "img";

/// URLハッシュの桁数（16進）
const URL_HASH_LEN: usize = 16;

#[derive(Debug, Clone)]
pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// キャッシュファイルのパス: `<image_id>-<urlハッシュ>.img`
    pub fn entry_path(&self, image: &CardImage) -> PathBuf {
        self.dir.join(format!(
            "{}-{}.{}",
            image.image_id,
            url_hash(&image.image_url),
            CACHE_FILE_EXTENSION
        ))
    }

    /// キャッシュをルックアップ（読めなければミス扱い）
    pub async fn get(&self, image: &CardImage) -> Option<Vec<u8>> {
        let path = self.entry_path(image);
        match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => Some(bytes),
            _ => None,
        }
    }

    /// キャッシュに追加（同じIDの古いURLのエントリは削除）
    pub async fn insert(&self, image: &CardImage, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        self.remove_stale(image.image_id, &self.entry_path(image)).await?;

        // 途中で落ちても壊れたファイルが残らないように一時ファイル経由
        let path = self.entry_path(image);
        let tmp_path = path.with_extension("tmp");
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        Ok(())
    }

    /// エントリを削除（なければ何もしない）
    pub async fn remove(&self, image: &CardImage) -> std::io::Result<()> {
        match tokio::fs::remove_file(self.entry_path(image)).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    async fn remove_stale(&self, image_id: ImageId, keep: &Path) -> std::io::Result<()> {
        let prefix = format!("{}-", image_id);
        for path in self.entries().await? {
            let is_same_id = path
                .file_name()
                .map(|n| n.to_string_lossy().starts_with(&prefix))
                .unwrap_or(false);
            if is_same_id && path != keep {
                tokio::fs::remove_file(&path).await?;
            }
        }
        Ok(())
    }

    async fn entries(&self) -> std::io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        let mut dir = match tokio::fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
            Err(e) => return Err(e),
        };

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            let is_cache_file = path
                .extension()
                .map(|ext| ext == CACHE_FILE_EXTENSION)
                .unwrap_or(false);
            if is_cache_file {
                entries.push(path);
            }
        }
        Ok(entries)
    }

    /// キャッシュ件数
    pub async fn len(&self) -> std::io::Result<usize> {
        Ok(self.entries().await?.len())
    }

    pub async fn is_empty(&self) -> std::io::Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// 合計サイズ（bytes）
    pub async fn size_bytes(&self) -> std::io::Result<u64> {
        let mut total = 0;
        for path in self.entries().await? {
            total += tokio::fs::metadata(&path).await?.len();
        }
        Ok(total)
    }

    /// 全削除。削除した件数を返す
    pub async fn clear(&self) -> std::io::Result<usize> {
        let entries = self.entries().await?;
        for path in &entries {
            tokio::fs::remove_file(path).await?;
        }
        Ok(entries.len())
    }
}

fn url_hash(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(URL_HASH_LEN);
    hash
}
