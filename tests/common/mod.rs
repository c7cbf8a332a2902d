//! テスト用のモック

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use truffle_common::CardImage;
use truffle_protos as pb;
use truffle_rust::{FetchError, ImageSource, RetrievedImage, ServiceError, TransformationClient};

/// 2x2のPNG
pub fn png_bytes() -> Vec<u8> {
    let pixels = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 30, 30, 255]));
    let mut buffer = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(pixels)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .expect("PNGエンコード失敗");
    buffer.into_inner()
}

pub fn augmented_image(image_id: i64, width: f32, height: f32) -> pb::AugmentedImage {
    pb::AugmentedImage {
        image_id,
        image_url: format!("https://cdn.example.com/cards/{}.png", image_id),
        image_name: format!("card-{}", image_id),
        physical_image_size: Some(pb::Size { width, height }),
    }
}

pub fn transformation_group(
    transformation_id: i64,
    images: Vec<pb::AugmentedImage>,
) -> pb::AugmentedTransformation {
    pb::AugmentedTransformation {
        transformation_id,
        augmented_images: images,
        augmented_video: Some(pb::AugmentedVideo {
            video_url: format!("https://cdn.example.com/videos/{}.mp4", transformation_id),
            video_width_scale_to_image_width: 1.0,
            video_dimension_width_px: 720,
            video_dimension_height_px: 1280,
            position: Some(pb::Position::default()),
        }),
        animation_effect: Some(pb::AnimationEffect {
            lottie_url: format!("https://cdn.example.com/lottie/{}.json", transformation_id),
            effect_view_size: Some(pb::Size { width: 256.0, height: 256.0 }),
            position: Some(pb::Position::default()),
        }),
        attachment_view: Some(pb::AttachmentView {
            attachment_ui_view_size: Some(pb::Size { width: 320.0, height: 64.0 }),
            attachment_width_scale_to_image_width: 1.0,
            position: Some(pb::Position {
                x_scale_to_image_width: 0.0,
                y: 0.0,
                z_scale_to_image_height: 0.6,
            }),
            link_buttons: vec![pb::LinkButton {
                text: "Website".to_string(),
                image_url: "https://cdn.example.com/icons/web.png".to_string(),
                color_code: "#336699".to_string(),
                web_url: "https://trufflear.com".to_string(),
            }],
        }),
    }
}

pub fn response(groups: Vec<pb::AugmentedTransformation>) -> pb::GetCardTransformationDataResponse {
    pb::GetCardTransformationDataResponse {
        augmented_transformations: groups,
    }
}

pub fn card_image(image_id: i64) -> CardImage {
    CardImage {
        image_id,
        image_url: format!("https://cdn.example.com/cards/{}.png", image_id),
        image_name: format!("card-{}", image_id),
        ..Default::default()
    }
}

type ClientResult = Result<pb::GetCardTransformationDataResponse, ServiceError>;

/// 決まった順にレスポンス（またはエラー）を返すクライアント。最後の結果は繰り返す
pub struct StaticClient {
    responses: Mutex<VecDeque<ClientResult>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StaticClient {
    pub fn sequence(responses: Vec<ClientResult>) -> Self {
        assert!(!responses.is_empty(), "レスポンスが1件以上必要");
        Self {
            responses: Mutex::new(responses.into()),
            delay: None,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn ok(response: pb::GetCardTransformationDataResponse) -> Self {
        Self::sequence(vec![Ok(response)])
    }

    pub fn failing() -> Self {
        Self::sequence(vec![Err(ServiceError::Generic)])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 同時に実行中だった呼び出しの最大数
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> ClientResult {
        let mut responses = self.responses.lock();
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().unwrap()
        }
    }
}

#[async_trait]
impl TransformationClient for StaticClient {
    async fn fetch_transformation_data(
        &self,
        _platform: &str,
    ) -> Result<pb::GetCardTransformationDataResponse, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.next_response()
    }
}

/// 画像IDごとの振る舞い
#[derive(Clone)]
pub enum Outcome {
    Png,
    Garbage,
    NotFound,
    Slow(Duration),
    Hang,
}

/// 画像IDごとに結果を決められるソース。未登録のIDはPNGを返す
#[derive(Default)]
pub struct ScriptedSource {
    outcomes: HashMap<i64, Outcome>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, image_id: i64, outcome: Outcome) -> Self {
        self.outcomes.insert(image_id, outcome);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSource for ScriptedSource {
    async fn retrieve(&self, image: &CardImage) -> Result<RetrievedImage, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let bytes = match self.outcomes.get(&image.image_id).cloned().unwrap_or(Outcome::Png) {
            Outcome::Png => png_bytes(),
            Outcome::Garbage => b"definitely not an image".to_vec(),
            Outcome::NotFound => {
                return Err(FetchError::Status {
                    status: 404,
                    url: image.image_url.clone(),
                })
            }
            Outcome::Slow(delay) => {
                tokio::time::sleep(delay).await;
                png_bytes()
            }
            Outcome::Hang => std::future::pending().await,
        };
        Ok(RetrievedImage::downloaded(bytes))
    }
}
