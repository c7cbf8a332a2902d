use thiserror::Error;
use truffle_common::ImageId;

/// 変換データ取得（gRPC）の失敗
///
/// 失敗の種類は呼び出し側に見せない。詳細は診断レポートに送る。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceError {
    #[error("変換データの取得に失敗しました")]
    Generic,
}

/// 画像1枚の取得・デコード失敗
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("画像URLが不正: {0}")]
    InvalidUrl(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTPステータス {status}: {url}")]
    Status { status: u16, url: String },

    #[error("画像デコードエラー: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("タスク実行エラー: {0}")]
    Task(String),
}

/// パイプライン全体の結果（呼び出し側に見えるのはこれだけ）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    #[error("変換データの取得に失敗しました")]
    Generic,

    #[error("処理がキャンセルされました")]
    Cancelled,
}

impl From<ServiceError> for PipelineError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Generic => PipelineError::Generic,
        }
    }
}

/// キャンセル（画像取得中）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("画像取得がキャンセルされました")]
pub struct Cancelled;

impl From<Cancelled> for PipelineError {
    fn from(_: Cancelled) -> Self {
        PipelineError::Cancelled
    }
}

/// CLI/設定レベルのエラー
#[derive(Error, Debug)]
pub enum TruffleError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("接続先が不正: {0}")]
    InvalidEndpoint(String),

    #[error("画像ID {0} の変換設定が見つかりません")]
    TransformationNotFound(ImageId),

    #[error("画像保存エラー: {0}")]
    ImageSave(#[from] image::ImageError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] truffle_common::Error),
}

pub type Result<T> = std::result::Result<T, TruffleError>;
