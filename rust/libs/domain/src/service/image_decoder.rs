use bytes::Bytes;
use tracing::debug;

use crate::model::ImageData;
use crate::ports::{ImageDecodeError, ImageDecoder};

/// imageクレートによる標準フォーマットのデコーダ実装
#[derive(Clone, Debug, Default)]
pub struct StandardImageDecoder;

impl ImageDecoder for StandardImageDecoder {
    fn decode(&self, data: Bytes) -> Result<ImageData, ImageDecodeError> {
        let format = image::guess_format(&data)
            .map_err(|e| ImageDecodeError::UnknownFormat(e.to_string()))?;
        debug!("画像フォーマットを判定: {:?}", format);

        image::load_from_memory(&data).map_err(|e| ImageDecodeError::DecodeError(e.to_string()))?;

        Ok(ImageData::from(data))
    }
}
