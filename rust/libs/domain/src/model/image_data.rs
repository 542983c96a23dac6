use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// デコード可能であることを検証済みの画像バイト列
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData(pub Bytes);

impl ImageData {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Bytes> for ImageData {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<ImageData> for Bytes {
    fn from(val: ImageData) -> Self {
        val.0
    }
}
