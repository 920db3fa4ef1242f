// リクエストからの入力抽出
//
// API Gatewayプロキシイベントからパスパラメータとボディを取り出す。

use lambda_http::{Request, RequestExt};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::response::ApiError;

/// ユーザーIDのパスパラメータ名
pub const PATH_USER_ID: &str = "userId";
/// ESPPロットIDのパスパラメータ名
pub const PATH_LOT_ID: &str = "lotId";

/// 必須パスパラメータを取得
///
/// 欠落または空文字列の場合は`ApiError::MissingPathParameter`。
pub fn require_path_parameter(request: &Request, name: &'static str) -> Result<String, ApiError> {
    request
        .path_parameters()
        .first(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(ApiError::MissingPathParameter(name))
}

/// リクエストボディをJSONとしてデコード
///
/// 不正なJSON、空のボディ、必須フィールドの欠落や型違いは
/// すべて`ApiError::InvalidRequestBody`になる。
pub fn parse_json_body<T>(request: &Request) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(request.body().as_ref()).map_err(|err| {
        warn!(error = %err, "リクエストボディのデコードに失敗");
        ApiError::InvalidRequestBody
    })
}
