use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use truffle_rust::{cli, config, error, fetcher, pipeline, diagnostics};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TruffleError};
use fetcher::{DecodedCardImage, ImageCache};
use pipeline::TransformationPipeline;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Refresh { platform, output } => {
            println!("🃏 truffle - 変換データ取得\n");

            let platform = platform.unwrap_or_else(|| config.platform.clone());
            let pipeline = build_pipeline(&config)?;
            let mut images = refresh_with_spinner(&pipeline, &platform).await?;
            images.sort_by_key(|image| image.image_id);

            let store = pipeline.store();
            println!("✔ 変換設定: {}件 / 画像: {}枚\n", store.len(), images.len());

            for image in &images {
                let transformation_id = store
                    .get(image.image_id)
                    .map(|t| t.transformation_id.to_string())
                    .unwrap_or_else(|| "-".into());
                println!(
                    "  [{}] {} (変換 {}) 実寸 {:.3}x{:.3} / {}x{}px",
                    image.image_id,
                    image.image_name,
                    transformation_id,
                    image.physical_size.width,
                    image.physical_size.height,
                    image.bitmap.width(),
                    image.bitmap.height(),
                );
            }

            let missing = store.len().saturating_sub(images.len());
            if missing > 0 {
                println!("\n⚠ {}枚の画像を取得できませんでした", missing);
            }

            if let Some(output_dir) = output {
                save_results(&images, &store, &output_dir)?;
                println!("\n✔ 結果を保存: {}", output_dir.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Lookup { image_id, platform } => {
            let platform = platform.unwrap_or_else(|| config.platform.clone());
            let pipeline = build_pipeline(&config)?;
            refresh_with_spinner(&pipeline, &platform).await?;

            match pipeline.lookup_transformation(image_id) {
                Some(transformation) => {
                    println!("{}", serde_json::to_string_pretty(&transformation)?);
                }
                None => {
                    eprintln!("{}", TruffleError::TransformationNotFound(image_id));
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { set_host, set_port, set_platform, plaintext, show } => {
            let mut config = config;
            let changed = set_host.is_some() || set_port.is_some() || set_platform.is_some() || plaintext.is_some();

            if let Some(host) = set_host {
                config.api_host = host;
            }
            if let Some(port) = set_port {
                config.api_port = port;
            }
            if let Some(platform) = set_platform {
                config.platform = platform;
            }
            if let Some(plaintext) = plaintext {
                config.use_tls = !plaintext;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先: {}", config.endpoint_uri());
                println!("  プラットフォーム: {}", config.platform);
                println!("  接続タイムアウト: {}秒", config.connect_timeout_seconds);
                println!("  リクエストタイムアウト: {}秒", config.request_timeout_seconds);
                println!("  画像キャッシュ: {}", config.image_cache_path()?.display());
            }
        }

        Commands::Cache { clear, info } => {
            let cache = ImageCache::new(config.image_cache_path()?);

            if info || !clear {
                println!("キャッシュ情報:");
                println!("  パス: {}", cache.dir().display());
                println!("  件数: {}", cache.len().await?);
                println!("  サイズ: {} bytes", cache.size_bytes().await?);
            }

            if clear {
                match cache.clear().await? {
                    0 => println!("キャッシュは空です"),
                    count => println!("✔ キャッシュを削除しました: {}件", count),
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_pipeline(config: &Config) -> Result<TransformationPipeline> {
    let diagnostics = Arc::new(diagnostics::TracingReporter);
    TransformationPipeline::from_config(config, diagnostics)
}

/// Ctrl-Cでキャンセルできる取得処理
async fn refresh_with_spinner(
    pipeline: &TransformationPipeline,
    platform: &str,
) -> Result<Vec<DecodedCardImage>> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("変換データを取得中... ({})", platform));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let cancel = CancellationToken::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let result = pipeline
        .refresh_transformations_cancellable(platform, &cancel)
        .await;

    ctrl_c.abort();
    spinner.finish_and_clear();

    Ok(result?)
}

fn save_results(
    images: &[DecodedCardImage],
    store: &truffle_common::TransformationStore,
    output_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;

    for image in images {
        let path = output_dir.join(format!("{}.png", image.image_id));
        image.bitmap.save(&path)?;
    }

    store.save_json(&output_dir.join("transformations.json"))?;
    Ok(())
}
