use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 画像取得1回あたりの既定タイムアウト
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// 画像取得1回分の入力
///
/// URLは未指定(None)も表現できる。検証はネットワークアクセスより前に
/// ユースケース側で行う。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchRequest {
    pub url: Option<String>,
    pub timeout: Duration,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self {
            url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
