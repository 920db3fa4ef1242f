/// PUT /user/{userId} Lambdaエントリポイント
///
/// API Gatewayプロキシイベントを受け取り、UpdateUserSettingsHandlerに委譲する。
use fife_api::application::UpdateUserSettingsHandler;
use fife_api::infrastructure::{init_logging, DynamoDbConfig, DynamoDocumentStore, StoreUserRepository};
use lambda_http::{run, service_fn, Error, Request};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("update_user_settings Lambda関数を初期化");

    // DynamoDBクライアントはコールドスタート時に一度だけ作成
    let config = DynamoDbConfig::from_env().await;
    let repo = StoreUserRepository::new(
        DynamoDocumentStore::new(config.client().clone()),
        config.users_table(),
    );
    let handler = UpdateUserSettingsHandler::new(repo);
    let handler = &handler;

    run(service_fn(move |request: Request| async move {
        Ok::<_, Error>(handler.handle(&request).await)
    }))
    .await
}
