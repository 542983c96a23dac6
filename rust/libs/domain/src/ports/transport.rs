use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use url::Url;

/// トランスポート層のエラー
#[derive(Clone, Debug, Error)]
pub enum TransportError {
    #[error("HTTP リクエストの実行に失敗: {0}")]
    RequestError(String),
}

/// HTTP GET 1回分の生のレスポンス
///
/// ステータスコードとボディ有無の解釈はユースケース側で行う。
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<Bytes>,
}

/// 画像取得に使うHTTPトランスポートのポート
///
/// 実装はローカル・中間キャッシュを使わず、呼び出しごとにオリジンへ
/// 取得しにいくこと。
#[async_trait]
pub trait Transport {
    /// 指定URLへタイムアウト付きのGETリクエストを1回発行する
    async fn get(&self, url: &Url, timeout: Duration) -> Result<RawResponse, TransportError>;
}
