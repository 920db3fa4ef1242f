/// ESPPロット削除ハンドラー
///
/// DELETE /espp/lot/{lotId}
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::{error, info};

use super::request::{PATH_LOT_ID, require_path_parameter};
use super::response::{ApiError, MessageBody, api_response};
use crate::infrastructure::EsppLotRepository;

/// 削除成功時のメッセージ
pub const DELETED_MESSAGE: &str = "ESPP lot deleted successfully";

/// ESPPロットを削除するハンドラー
///
/// 削除は冪等で、存在しないIDでも200を返す。
pub struct DeleteEsppLotHandler<LR>
where
    LR: EsppLotRepository,
{
    lot_repo: LR,
}

impl<LR> DeleteEsppLotHandler<LR>
where
    LR: EsppLotRepository,
{
    /// 新しいDeleteEsppLotHandlerを作成
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
        let lot_id = require_path_parameter(request, PATH_LOT_ID)?;

        self.lot_repo.delete_espp_lot(&lot_id).await.map_err(|err| {
            error!(lot_id = %lot_id, error = %err, "ESPPロットの削除に失敗");
            ApiError::Internal("Failed to delete ESPP lot")
        })?;

        info!(lot_id = %lot_id, "ESPPロットを削除");
        Ok(api_response(
            StatusCode::OK,
            &MessageBody {
                message: DELETED_MESSAGE,
            },
        ))
    }
}
