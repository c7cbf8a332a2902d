//! カード変換の型定義
//!
//! gRPCレスポンスから変換されたアプリ側の値オブジェクト。
//! レンダリング層（AR側）はこれらを読むだけで、生成後に書き換えることはない。

use serde::{Deserialize, Serialize};

/// 画像ID（ARトラッキング画像の名前としても使う）
pub type ImageId = i64;

/// サイズ（実寸またはUIサイズ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 検出画像を基準にした配置
///
/// x/z は検出画像の幅/高さに対する比率、y は固定オフセット。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x_scale_to_image_width: f32,
    pub y: f32,
    pub z_scale_to_image_height: f32,
}

/// リンクボタン
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub title: String,
    pub image_url: String,
    pub color_code: String,   // "#RRGGBB"
    pub web_url: String,
}

/// リンクボタン一覧ビューの設定
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentViewConfig {
    pub ui_size: Size,
    pub width_scale_to_image_width: f32,
    pub position: Position,
}

/// Lottieエフェクトの設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationEffectConfig {
    pub lottie_url: String,
    pub size: Size,
    pub position: Position,
}

/// 動画オーバーレイの設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardVideo {
    pub video_url: String,
    pub width_scale_to_image_width: f32,
    pub video_width_px: i32,
    pub video_height_px: i32,
    pub position: Position,
}

/// 検出対象のカード画像（ダウンロード前）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub image_id: ImageId,
    pub image_url: String,
    pub image_name: String,
    pub physical_size: Size,
}

/// 1枚のカード画像に対する変換設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransformation {
    pub transformation_id: i64,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub attachment_view_config: AttachmentViewConfig,
    pub animation_effect_config: AnimationEffectConfig,
    pub card_image: CardImage,
    pub card_video: CardVideo,
}

impl CardTransformation {
    pub fn image_id(&self) -> ImageId {
        self.card_image.image_id
    }
}
