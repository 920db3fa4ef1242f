// APIレスポンス生成
//
// 全ルート共通のJSONレスポンス（ステータス、本文、固定ヘッダー）と
// クライアント向けエラーの分類を提供する。

use lambda_http::http::StatusCode;
use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, HeaderMap, HeaderValue,
};
use lambda_http::{Body, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// シリアライズ自体に失敗した場合の本文
const SERIALIZATION_FAILURE_BODY: &str = r#"{"error":"Internal server error"}"#;

/// クライアントに返すエラー
///
/// `Display`の文字列がそのままレスポンス本文の`error`になる。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// 必須パスパラメータが欠落または空
    #[error("Missing path parameter: {0}")]
    MissingPathParameter(&'static str),

    /// リクエストボディを入力型にデコードできない
    #[error("Invalid request body")]
    InvalidRequestBody,

    /// 単一レコード取得で対象が存在しない（引数はエンティティ名）
    #[error("{0} not found")]
    NotFound(&'static str),

    /// データアクセス層の失敗（引数はルートごとの固定メッセージ）
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// エラー種別に対応するHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingPathParameter(_) | ApiError::InvalidRequestBody => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `{"error": "..."}`形式のレスポンスに変換
    pub fn to_response(&self) -> Response<Body> {
        let message = self.to_string();
        api_response(self.status_code(), &ErrorBody { error: &message })
    }
}

/// エラーレスポンス本文
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// メッセージのみのレスポンス本文
#[derive(Debug, Serialize)]
pub struct MessageBody<'a> {
    pub message: &'a str,
}

/// ステータスと任意のシリアライズ可能な値からJSONレスポンスを生成
///
/// 値のシリアライズに失敗した場合は500を返す。
pub fn api_response<T>(status: StatusCode, body: &T) -> Response<Body>
where
    T: Serialize + ?Sized,
{
    let (status, json) = match serde_json::to_string(body) {
        Ok(json) => (status, json),
        Err(err) => {
            error!(error = %err, "レスポンスのシリアライズに失敗");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                SERIALIZATION_FAILURE_BODY.to_string(),
            )
        }
    };

    let mut response = Response::new(Body::Text(json));
    *response.status_mut() = status;
    *response.headers_mut() = build_json_headers();
    response
}

/// 全レスポンス共通のヘッダーを生成
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
pub fn build_json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

    headers
}
