/// ユーザー別ESPPロット一覧ハンドラー
///
/// GET /user/{userId}/espp/lots
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::{error, info};

use super::request::{PATH_USER_ID, require_path_parameter};
use super::response::{ApiError, api_response};
use crate::infrastructure::EsppLotRepository;

/// ユーザーの全ESPPロットを返すハンドラー
///
/// ロットが無い場合も404ではなく空配列を返す。
pub struct ListEsppLotsHandler<LR>
where
    LR: EsppLotRepository,
{
    lot_repo: LR,
}

impl<LR> ListEsppLotsHandler<LR>
where
    LR: EsppLotRepository,
{
    /// 新しいListEsppLotsHandlerを作成
    pub fn new(lot_repo: LR) -> Self {
        Self { lot_repo }
    }

    /// リクエストを処理してレスポンスを生成
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        match self.process(request).await {
            Ok(response) => response,
            Err(err) => err.to_response(),
        }
    }

    async fn process(&self, request: &Request) -> Result<Response<Body>, ApiError> {
        let user_id = require_path_parameter(request, PATH_USER_ID)?;

        let lots = self
            .lot_repo
            .get_espp_lots_by_user_id(&user_id)
            .await
            .map_err(|err| {
                error!(user_id = %user_id, error = %err, "ESPPロット一覧の取得に失敗");
                ApiError::Internal("Failed to retrieve ESPP lots")
            })?;

        info!(user_id = %user_id, count = lots.len(), "ESPPロット一覧を取得");
        Ok(api_response(StatusCode::OK, &lots))
    }
}
