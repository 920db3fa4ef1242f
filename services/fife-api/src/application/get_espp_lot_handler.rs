/// ESPPロット取得ハンドラー
///
/// GET /espp/lot/{lotId}
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::{error, info};

use super::request::{PATH_LOT_ID, require_path_parameter};
use super::response::{ApiError, api_response};
use crate::infrastructure::EsppLotRepository;

/// ESPPロットを1件取得するハンドラー
pub struct GetEsppLotHandler<LR>
where
    LR: EsppLotRepository,
{
    lot_repo: LR,
}

impl<LR> GetEsppLotHandler<LR>
where
    LR: EsppLotRepository,
{
    /// 新しいGetEsppLotHandlerを作成
    pub fn new(lot_repo: LR) -> Self {
        Self { lot_repo }
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// * 200: ロット
    /// * 400: lotId欠落
    /// * 404: ロットが存在しない
    /// * 500: データアクセス失敗
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        match self.process(request).await {
            Ok(response) => response,
            Err(err) => err.to_response(),
        }
    }

    async fn process(&self, request: &Request) -> Result<Response<Body>, ApiError> {
        let lot_id = require_path_parameter(request, PATH_LOT_ID)?;

        let lot = self.lot_repo.get_espp_lot(&lot_id).await.map_err(|err| {
            error!(lot_id = %lot_id, error = %err, "ESPPロットの取得に失敗");
            ApiError::Internal("Failed to retrieve ESPP lot")
        })?;

        let lot = lot.ok_or(ApiError::NotFound("ESPP lot"))?;

        info!(lot_id = %lot_id, "ESPPロットを取得");
        Ok(api_response(StatusCode::OK, &lot))
    }
}
