//! gRPCレスポンス → ルックアップ変換
//!
//! 変換グループ × 画像 の組ごとに `CardTransformation` を1件作る。
//! 同じグループ内の画像は動画/エフェクト/リンクビューの設定を共有する。
//!
//! 画像IDの重複: 後勝ち。上書きした組は `ImageCollision` として結果に残す
//! （ログ出力は呼び出し側）。

use crate::store::TransformationStore;
use crate::types::{
    AnimationEffectConfig, Attachment, AttachmentViewConfig, CardImage, CardTransformation,
    CardVideo, ImageId, Position, Size,
};
use truffle_protos as pb;

/// 画像IDの重複（後のグループが前のグループを上書きした）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCollision {
    pub image_id: ImageId,
    pub replaced_transformation_id: i64,
    pub winning_transformation_id: i64,
}

/// 変換結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingOutcome {
    pub store: TransformationStore,
    pub collisions: Vec<ImageCollision>,
}

/// レスポンスをルックアップに変換（副作用なし）
pub fn map_transformations(response: &pb::GetCardTransformationDataResponse) -> MappingOutcome {
    let mut outcome = MappingOutcome::default();

    for group in &response.augmented_transformations {
        let shared = SharedConfig::from_group(group);

        for image in &group.augmented_images {
            let transformation = shared.for_image(group.transformation_id, image);
            if let Some(replaced) = outcome.store.insert(transformation) {
                outcome.collisions.push(ImageCollision {
                    image_id: image.image_id,
                    replaced_transformation_id: replaced.transformation_id,
                    winning_transformation_id: group.transformation_id,
                });
            }
        }
    }

    outcome
}

/// グループ内の画像で共有される設定
struct SharedConfig {
    attachments: Vec<Attachment>,
    attachment_view_config: AttachmentViewConfig,
    animation_effect_config: AnimationEffectConfig,
    card_video: CardVideo,
}

impl SharedConfig {
    fn from_group(group: &pb::AugmentedTransformation) -> Self {
        let attachment_view = group.attachment_view.clone().unwrap_or_default();
        let animation_effect = group.animation_effect.clone().unwrap_or_default();
        let video = group.augmented_video.clone().unwrap_or_default();

        Self {
            attachments: attachment_view
                .link_buttons
                .iter()
                .map(to_attachment)
                .collect(),
            attachment_view_config: AttachmentViewConfig {
                ui_size: to_size(attachment_view.attachment_ui_view_size),
                width_scale_to_image_width: attachment_view.attachment_width_scale_to_image_width,
                position: to_position(attachment_view.position),
            },
            animation_effect_config: AnimationEffectConfig {
                lottie_url: animation_effect.lottie_url,
                size: to_size(animation_effect.effect_view_size),
                position: to_position(animation_effect.position),
            },
            card_video: CardVideo {
                video_url: video.video_url,
                width_scale_to_image_width: video.video_width_scale_to_image_width,
                video_width_px: video.video_dimension_width_px,
                video_height_px: video.video_dimension_height_px,
                position: to_position(video.position),
            },
        }
    }

    fn for_image(&self, transformation_id: i64, image: &pb::AugmentedImage) -> CardTransformation {
        CardTransformation {
            transformation_id,
            attachments: self.attachments.clone(),
            attachment_view_config: self.attachment_view_config,
            animation_effect_config: self.animation_effect_config.clone(),
            card_image: CardImage {
                image_id: image.image_id,
                image_url: image.image_url.clone(),
                image_name: image.image_name.clone(),
                physical_size: to_size(image.physical_image_size),
            },
            card_video: self.card_video.clone(),
        }
    }
}

fn to_attachment(button: &pb::LinkButton) -> Attachment {
    Attachment {
        title: button.text.clone(),
        image_url: button.image_url.clone(),
        color_code: button.color_code.clone(),
        web_url: button.web_url.clone(),
    }
}

fn to_size(size: Option<pb::Size>) -> Size {
    let size = size.unwrap_or_default();
    Size::new(size.width, size.height)
}

fn to_position(position: Option<pb::Position>) -> Position {
    let position = position.unwrap_or_default();
    Position {
        x_scale_to_image_width: position.x_scale_to_image_width,
        y: position.y,
        z_scale_to_image_height: position.z_scale_to_image_height,
    }
}
