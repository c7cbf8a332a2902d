//! Truffle Common Library
//!
//! パイプラインとCLIで共有される型と変換ロジック
//! - types: 変換設定の値オブジェクト
//! - mapper: gRPCレスポンス → ルックアップ
//! - store: 画像ID → 変換設定

pub mod error;
pub mod mapper;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use mapper::{map_transformations, ImageCollision, MappingOutcome};
pub use store::TransformationStore;
pub use types::{
    AnimationEffectConfig, Attachment, AttachmentViewConfig, CardImage, CardTransformation,
    CardVideo, ImageId, Position, Size,
};
