//! 画像取得ユースケースの実装

use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinSet;
use tracing::{debug, error, info};
use url::Url;

use crate::{
    error::ImageLoadError,
    model::{DEFAULT_TIMEOUT, FetchRequest, ImageData},
    ports::{ImageDecoder, Transport},
};

/// 画像取得の設定
#[derive(Clone, Debug)]
pub struct LoaderConfig {
    pub source_url: String,
    pub timeout: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source_url: "https://picsum.photos/300".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// 画像取得ユースケース
#[async_trait]
pub trait ImageLoadUseCase {
    /// リクエスト1件分の画像を取得する
    async fn load_image(&self, request: &FetchRequest) -> Result<ImageData, ImageLoadError>;

    /// 設定済みの取得元からcount枚の画像を並行取得する
    async fn load_images(&self, count: usize) -> Result<Vec<ImageData>, ImageLoadError>;
}

#[derive(Clone)]
pub struct ImageLoadUseCaseImpl<T, D>
where
    T: Transport + Send + Sync,
    D: ImageDecoder + Send + Sync,
{
    transport: T,
    decoder: D,
    config: LoaderConfig,
}

impl<T, D> ImageLoadUseCaseImpl<T, D>
where
    T: Transport + Send + Sync,
    D: ImageDecoder + Send + Sync,
{
    pub fn new(transport: T, decoder: D, config: LoaderConfig) -> Self {
        Self {
            transport,
            decoder,
            config,
        }
    }

    pub fn with_defaults(transport: T, decoder: D) -> Self {
        Self::new(transport, decoder, LoaderConfig::default())
    }

    /// 設定済みの取得元に対する既定リクエストを作る
    fn source_request(&self) -> FetchRequest {
        FetchRequest {
            url: Some(self.config.source_url.clone()),
            timeout: self.config.timeout,
        }
    }
}

#[async_trait]
impl<T, D> ImageLoadUseCase for ImageLoadUseCaseImpl<T, D>
where
    T: Transport + Clone + Send + Sync + 'static,
    D: ImageDecoder + Clone + Send + Sync + 'static,
{
    async fn load_image(&self, request: &FetchRequest) -> Result<ImageData, ImageLoadError> {
        let url = match &request.url {
            Some(raw) => match Url::parse(raw) {
                Ok(url) => url,
                Err(e) => {
                    error!("URLを解析できません: {}: {}", raw, e);
                    return Err(ImageLoadError::InvalidUrl);
                }
            },
            None => {
                error!("URLが指定されていません");
                return Err(ImageLoadError::InvalidUrl);
            }
        };

        debug!("画像を取得します: {}", url);

        let response = match self.transport.get(&url, request.timeout).await {
            Ok(response) => response,
            Err(e) => {
                error!("トランスポートエラー: {}", e);
                return Err(ImageLoadError::InvalidResponse);
            }
        };

        // ボディ有無の判定はステータス判定より先に行う
        let Some(body) = response.body else {
            error!("レスポンスにボディがありません: {}", url);
            return Err(ImageLoadError::Unknown);
        };

        if response.status != 200 {
            error!(
                "ステータスコードが200ではありません: {} ({})",
                response.status, url
            );
            return Err(ImageLoadError::InvalidResponse);
        }

        match self.decoder.decode(body) {
            Ok(image) => {
                debug!("画像を取得しました: {} bytes ({})", image.len(), url);
                Ok(image)
            }
            Err(e) => {
                error!("画像のデコードに失敗: {}: {}", url, e);
                Err(ImageLoadError::InvalidImage)
            }
        }
    }

    async fn load_images(&self, count: usize) -> Result<Vec<ImageData>, ImageLoadError> {
        let requests = vec![self.source_request(); count];
        self.load_images_from(requests).await
    }
}

impl<T, D> ImageLoadUseCaseImpl<T, D>
where
    T: Transport + Clone + Send + Sync + 'static,
    D: ImageDecoder + Clone + Send + Sync + 'static,
{
    /// リクエスト列を並行取得する
    ///
    /// 結果は到着順に収集され、launch順とは一致しない。いずれか1件が
    /// 失敗するとバッチ全体がその失敗で終わり、部分的な結果は返さない。
    pub async fn load_images_from(
        &self,
        requests: Vec<FetchRequest>,
    ) -> Result<Vec<ImageData>, ImageLoadError> {
        debug!("{}件の画像を並行取得します", requests.len());

        let mut tasks = JoinSet::new();
        for request in requests {
            let usecase = self.clone();
            tasks.spawn(async move { usecase.load_image(&request).await });
        }

        let mut images = Vec::with_capacity(tasks.len());
        let mut first_error: Option<ImageLoadError> = None;

        // 最初の失敗を記録した後も残りのタスクはキャンセルせず完了まで待ち、
        // 遅れて届いた結果は破棄する
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(image)) => {
                    if first_error.is_none() {
                        images.push(image);
                    }
                }
                Ok(Err(e)) => {
                    if first_error.is_none() {
                        error!("バッチ内の画像取得に失敗: {}", e);
                        first_error = Some(e);
                    }
                }
                Err(e) => {
                    if first_error.is_none() {
                        error!("取得タスクのjoinに失敗: {}", e);
                        first_error = Some(ImageLoadError::Unknown);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                info!("{}件の画像を取得しました", images.len());
                Ok(images)
            }
        }
    }

    /// 完了ハンドラを1回だけ呼ぶ非ブロッキング形
    ///
    /// URL検証を含む全ての失敗はcompletionへ渡され、この関数自体は失敗
    /// しない。ランタイム上ではタスクを生成して非同期に配送し、Tokio
    /// ランタイムの外で呼ばれた場合のみその場でUnknownを渡す。
    pub fn load_image_with_callback<F>(&self, request: FetchRequest, completion: F)
    where
        F: FnOnce(Result<ImageData, ImageLoadError>) + Send + 'static,
    {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            error!("Tokioランタイムの外から呼び出されました");
            completion(Err(ImageLoadError::Unknown));
            return;
        };

        let usecase = self.clone();
        handle.spawn(async move {
            let result = usecase.load_image(&request).await;
            completion(result);
        });
    }
}
