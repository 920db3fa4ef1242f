/// ユーザー設定更新ハンドラー
///
/// PUT /user/{userId}
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::{error, info};

use super::request::{PATH_USER_ID, parse_json_body, require_path_parameter};
use super::response::{ApiError, api_response};
use crate::domain::UserSettings;
use crate::infrastructure::UserRepository;

/// ユーザー設定を上書きするハンドラー
pub struct UpdateUserSettingsHandler<UR>
where
    UR: UserRepository,
{
    user_repo: UR,
}

impl<UR> UpdateUserSettingsHandler<UR>
where
    UR: UserRepository,
{
    /// 新しいUpdateUserSettingsHandlerを作成
    pub fn new(user_repo: UR) -> Self {
        Self { user_repo }
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// * 200: 更新後のユーザー
    /// * 400: userId欠落、またはボディが`UserSettings`でない
    /// * 500: データアクセス失敗
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        match self.process(request).await {
            Ok(response) => response,
            Err(err) => err.to_response(),
        }
    }

    async fn process(&self, request: &Request) -> Result<Response<Body>, ApiError> {
        let user_id = require_path_parameter(request, PATH_USER_ID)?;
        let settings: UserSettings = parse_json_body(request)?;

        let user = self
            .user_repo
            .update_user_settings(&user_id, &settings)
            .await
            .map_err(|err| {
                error!(user_id = %user_id, error = %err, "ユーザー設定の更新に失敗");
                ApiError::Internal("Failed to update user settings")
            })?;

        info!(user_id = %user_id, updated_at = %user.updated_at, "ユーザー設定を更新");
        Ok(api_response(StatusCode::OK, &user))
    }
}
