/// ユーザー取得ハンドラー
///
/// GET /user/{userId}
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::{error, info};

use super::request::{PATH_USER_ID, require_path_parameter};
use super::response::{ApiError, api_response};
use crate::infrastructure::UserRepository;

/// ユーザーを1件取得するハンドラー
pub struct GetUserHandler<UR>
where
    UR: UserRepository,
{
    user_repo: UR,
}

impl<UR> GetUserHandler<UR>
where
    UR: UserRepository,
{
    /// 新しいGetUserHandlerを作成
    pub fn new(user_repo: UR) -> Self {
        Self { user_repo }
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// * 200: ユーザー
    /// * 400: userId欠落
    /// * 404: ユーザーが存在しない
    /// * 500: データアクセス失敗
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        match self.process(request).await {
            Ok(response) => response,
            Err(err) => err.to_response(),
        }
    }

    async fn process(&self, request: &Request) -> Result<Response<Body>, ApiError> {
        let user_id = require_path_parameter(request, PATH_USER_ID)?;

        let user = self.user_repo.get_user(&user_id).await.map_err(|err| {
            error!(user_id = %user_id, error = %err, "ユーザーの取得に失敗");
            ApiError::Internal("Failed to retrieve user")
        })?;

        let user = user.ok_or(ApiError::NotFound("User"))?;

        info!(user_id = %user_id, "ユーザーを取得");
        Ok(api_response(StatusCode::OK, &user))
    }
}
