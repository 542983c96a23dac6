use bytes::Bytes;
use thiserror::Error;

use crate::model::ImageData;

#[derive(Clone, Debug, Error)]
pub enum ImageDecodeError {
    #[error("画像フォーマットを認識できません: {0}")]
    UnknownFormat(String),

    #[error("画像のデコードに失敗: {0}")]
    DecodeError(String),
}

/// バイト列を検証済み画像へ変換するポート。デコードは同期処理で
/// サスペンドしない。
pub trait ImageDecoder {
    fn decode(&self, data: Bytes) -> Result<ImageData, ImageDecodeError>;
}
