//! 画像キャッシュテスト
//!
//! キャッシュ済みの画像はネットワークなしで取得・デコードできることを検証

mod common;

use common::{card_image, png_bytes};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use truffle_rust::fetcher::{HttpImageSource, ImageCache};
use truffle_rust::{ImageFetcher, MemoryReporter, TruffleError};

/// 接続できないURLでもキャッシュがあれば取得できる
#[tokio::test]
async fn test_cached_images_fetch_offline() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = ImageCache::new(dir.path());

    let mut images = Vec::new();
    for id in 1..=3 {
        let mut image = card_image(id);
        image.image_url = format!("http://127.0.0.1:1/cards/{}.png", id);
        cache.insert(&image, &png_bytes()).await.expect("キャッシュ保存失敗");
        images.push(image);
    }

    let source = Arc::new(HttpImageSource::new(reqwest::Client::new()).with_cache(cache));
    let reporter = Arc::new(MemoryReporter::new());
    let fetcher = ImageFetcher::new(source, reporter.clone());

    let decoded = fetcher.fetch_all(&images).await;

    assert_eq!(decoded.len(), 3);
    assert!(reporter.is_empty());
}

/// キャッシュにない画像だけ失敗する
#[tokio::test]
async fn test_uncached_image_fails_alone() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = ImageCache::new(dir.path());

    let mut cached = card_image(1);
    cached.image_url = "http://127.0.0.1:1/cards/1.png".to_string();
    cache.insert(&cached, &png_bytes()).await.unwrap();

    let mut uncached = card_image(2);
    uncached.image_url = "http://127.0.0.1:1/cards/2.png".to_string();

    let source = Arc::new(HttpImageSource::new(reqwest::Client::new()).with_cache(cache));
    let reporter = Arc::new(MemoryReporter::new());
    let fetcher = ImageFetcher::new(source, reporter.clone());

    let decoded = fetcher.fetch_all(&[cached, uncached]).await;

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].image_id, 1);
    assert_eq!(reporter.len(), 1);
    assert!(reporter.reports()[0].message.contains("画像 2"));
}

/// キャッシュの情報と削除
#[tokio::test]
async fn test_cache_info_and_clear() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = ImageCache::new(dir.path().join("nested").join("images"));

    // ディレクトリがなくても空として扱う
    assert_eq!(cache.len().await.unwrap(), 0);
    assert_eq!(cache.size_bytes().await.unwrap(), 0);

    let bytes = png_bytes();
    for id in 1..=2 {
        cache.insert(&card_image(id), &bytes).await.unwrap();
    }
    assert_eq!(cache.len().await.unwrap(), 2);
    assert_eq!(cache.size_bytes().await.unwrap(), 2 * bytes.len() as u64);

    assert_eq!(cache.clear().await.unwrap(), 2);
    assert!(cache.is_empty().await.unwrap());
}

/// ローカルサーバー用（環境のプロキシ設定を無視）
fn local_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("HTTPクライアント生成失敗")
}

/// 決まった順にボディを返すHTTPサーバー（最後のボディは繰り返す）。URLとアクセス数を返す
async fn image_server(bodies: Vec<Vec<u8>>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            // リクエストヘッダを読み切る
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let hit = counter.fetch_add(1, Ordering::SeqCst);
            let body = &bodies[hit.min(bodies.len() - 1)];
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes()).await;
            let _ = stream.write_all(body).await;
            let _ = stream.shutdown().await;
        }
    });

    (format!("http://{}", addr), hits)
}

/// 200でも画像でないボディはキャッシュしない（次回は取り直す）
#[tokio::test]
async fn test_undecodable_download_is_not_cached() {
    let (base_url, hits) =
        image_server(vec![b"<html>maintenance</html>".to_vec(), png_bytes()]).await;
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = ImageCache::new(dir.path());

    let mut image = card_image(1);
    image.image_url = format!("{}/cards/1.png", base_url);

    let source = Arc::new(HttpImageSource::new(local_http_client()).with_cache(cache.clone()));
    let reporter = Arc::new(MemoryReporter::new());
    let fetcher = ImageFetcher::new(source, reporter.clone());

    let first = fetcher.fetch_all(std::slice::from_ref(&image)).await;
    assert!(first.is_empty());
    assert_eq!(reporter.len(), 1);
    assert!(cache.is_empty().await.unwrap());

    let second = fetcher.fetch_all(std::slice::from_ref(&image)).await;
    assert_eq!(second.len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(cache.len().await.unwrap(), 1);

    // デコードできた画像はキャッシュから返る
    let third = fetcher.fetch_all(std::slice::from_ref(&image)).await;
    assert_eq!(third.len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

/// デコードできないキャッシュは捨てて、次回はダウンロードする
#[tokio::test]
async fn test_undecodable_cache_entry_is_evicted() {
    let (base_url, hits) = image_server(vec![png_bytes()]).await;
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = ImageCache::new(dir.path());

    let mut image = card_image(2);
    image.image_url = format!("{}/cards/2.png", base_url);
    cache.insert(&image, b"truncated object").await.unwrap();

    let source = Arc::new(HttpImageSource::new(local_http_client()).with_cache(cache.clone()));
    let reporter = Arc::new(MemoryReporter::new());
    let fetcher = ImageFetcher::new(source, reporter.clone());

    let first = fetcher.fetch_all(std::slice::from_ref(&image)).await;
    assert!(first.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(cache.is_empty().await.unwrap());

    let second = fetcher.fetch_all(std::slice::from_ref(&image)).await;
    assert_eq!(second.len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(cache.get(&image).await, Some(png_bytes()));
}

/// 削除できないキャッシュはエラーとして返す（CLIの終了コードに反映される）
#[tokio::test]
async fn test_clear_failure_is_io_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let not_a_dir = dir.path().join("images");
    std::fs::write(&not_a_dir, "file, not a directory").unwrap();
    let cache = ImageCache::new(&not_a_dir);

    let err: TruffleError = cache.clear().await.unwrap_err().into();

    assert!(matches!(err, TruffleError::Io(_)));
}
