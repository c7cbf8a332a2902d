//! 画像ID → 変換設定のルックアップ
//!
//! パイプライン1回ごとに丸ごと作り直す。作成後は読み取り専用。

use crate::error::Result;
use crate::types::{CardImage, CardTransformation, ImageId};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformationStore {
    entries: HashMap<ImageId, CardTransformation>,
}

impl TransformationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存エントリがあれば置き換え、置き換えられた値を返す
    pub(crate) fn insert(&mut self, transformation: CardTransformation) -> Option<CardTransformation> {
        self.entries.insert(transformation.image_id(), transformation)
    }

    pub fn get(&self, image_id: ImageId) -> Option<&CardTransformation> {
        self.entries.get(&image_id)
    }

    pub fn contains(&self, image_id: ImageId) -> bool {
        self.entries.contains_key(&image_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ImageId, &CardTransformation)> {
        self.entries.iter()
    }

    /// 画像ID（昇順）
    pub fn image_ids(&self) -> Vec<ImageId> {
        let mut ids: Vec<ImageId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// 登録されている画像（ID昇順、キーが一意なので重複なし）
    pub fn card_images(&self) -> Vec<CardImage> {
        self.image_ids()
            .into_iter()
            .filter_map(|id| self.entries.get(&id))
            .map(|t| t.card_image.clone())
            .collect()
    }

    /// ID昇順のJSON配列
    pub fn to_json_pretty(&self) -> Result<String> {
        let ordered: Vec<&CardTransformation> = self
            .image_ids()
            .into_iter()
            .filter_map(|id| self.entries.get(&id))
            .collect();
        Ok(serde_json::to_string_pretty(&ordered)?)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
