/// GET /user/{userId}/espp/lots Lambdaエントリポイント
///
/// API Gatewayプロキシイベントを受け取り、ListEsppLotsHandlerに委譲する。
use fife_api::application::ListEsppLotsHandler;
use fife_api::infrastructure::{init_logging, DynamoDbConfig, DynamoDocumentStore, StoreEsppLotRepository};
use lambda_http::{run, service_fn, Error, Request};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("list_espp_lots Lambda関数を初期化");

    // DynamoDBクライアントはコールドスタート時に一度だけ作成
    let config = DynamoDbConfig::from_env().await;
    let repo = StoreEsppLotRepository::new(
        DynamoDocumentStore::new(config.client().clone()),
        config.espp_lots_table(),
        config.espp_lots_user_index(),
    );
    let handler = ListEsppLotsHandler::new(repo);
    let handler = &handler;

    run(service_fn(move |request: Request| async move {
        Ok::<_, Error>(handler.handle(&request).await)
    }))
    .await
}
