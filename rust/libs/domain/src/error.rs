use thiserror::Error;

/// 画像取得が失敗したときの種別
///
/// 表示文字列はそのままユーザー向けメッセージとして利用できる。
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ImageLoadError {
    /// URLが未指定、または解析できない形式だった
    #[error("有効でないURLが指定されました")]
    InvalidUrl,

    /// トランスポートエラー、またはステータスコードが200以外だった
    #[error("有効でないレスポンスを受信しました")]
    InvalidResponse,

    /// 取得したデータを画像としてデコードできなかった
    #[error("画像として読み込めないデータです")]
    InvalidImage,

    /// ボディ欠落など、上記に分類できない異常系
    #[error("不明なエラーが発生しました")]
    Unknown,
}
