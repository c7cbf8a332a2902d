//! Truffle カード変換データ取得パイプライン
//!
//! - client: gRPCで変換データを取得
//! - fetcher: カード画像の並列取得とデコード
//! - pipeline: 取得 → 変換 → 画像取得 をまとめた入口とルックアップ

pub mod cli;
pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fetcher;
pub mod pipeline;

pub use client::{GrpcTransformationClient, TransformationClient};
pub use diagnostics::{DiagnosticsReporter, MemoryReporter, TracingReporter};
pub use error::{Cancelled, FetchError, PipelineError, ServiceError, TruffleError};
pub use fetcher::{DecodedCardImage, ImageFetcher, ImageSource, RetrievedImage};
pub use pipeline::TransformationPipeline;
