/// ESPPロット作成ハンドラー
///
/// POST /espp/lot
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::{error, info};

use super::request::parse_json_body;
use super::response::{ApiError, api_response};
use crate::domain::EsppLotInput;
use crate::infrastructure::EsppLotRepository;

/// ESPPロットを作成するハンドラー
pub struct CreateEsppLotHandler<LR>
where
    LR: EsppLotRepository,
{
    lot_repo: LR,
}

impl<LR> CreateEsppLotHandler<LR>
where
    LR: EsppLotRepository,
{
    /// 新しいCreateEsppLotHandlerを作成
    pub fn new(lot_repo: LR) -> Self {
        Self { lot_repo }
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// * 201: 作成したロット（ID・タイムスタンプ付き）
    /// * 400: ボディが`EsppLotInput`でない
    /// * 500: データアクセス失敗
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        match self.process(request).await {
            Ok(response) => response,
            Err(err) => err.to_response(),
        }
    }

    async fn process(&self, request: &Request) -> Result<Response<Body>, ApiError> {
        let input: EsppLotInput = parse_json_body(request)?;
        let user_id = input.user_id.clone();

        let lot = self.lot_repo.create_espp_lot(input).await.map_err(|err| {
            error!(user_id = %user_id, error = %err, "ESPPロットの作成に失敗");
            ApiError::Internal("Failed to create ESPP lot")
        })?;

        info!(user_id = %lot.user_id, lot_id = %lot.id, "ESPPロットを作成");
        Ok(api_response(StatusCode::CREATED, &lot))
    }
}
