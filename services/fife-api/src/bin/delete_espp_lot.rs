/// DELETE /espp/lot/{lotId} Lambdaエントリポイント
///
/// API Gatewayプロキシイベントを受け取り、DeleteEsppLotHandlerに委譲する。
use fife_api::application::DeleteEsppLotHandler;
use fife_api::infrastructure::{init_logging, DynamoDbConfig, DynamoDocumentStore, StoreEsppLotRepository};
use lambda_http::{run, service_fn, Error, Request};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("delete_espp_lot Lambda関数を初期化");

    // DynamoDBクライアントはコールドスタート時に一度だけ作成
    let config = DynamoDbConfig::from_env().await;
    let repo = StoreEsppLotRepository::new(
        DynamoDocumentStore::new(config.client().clone()),
        config.espp_lots_table(),
        config.espp_lots_user_index(),
    );
    let handler = DeleteEsppLotHandler::new(repo);
    let handler = &handler;

    run(service_fn(move |request: Request| async move {
        Ok::<_, Error>(handler.handle(&request).await)
    }))
    .await
}
