/// DynamoDB接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;

/// ユーザーテーブル名の環境変数
pub const USERS_TABLE_ENV: &str = "USERS_TABLE";
/// ESPPロットテーブル名の環境変数
pub const ESPP_LOTS_TABLE_ENV: &str = "ESPP_LOTS_TABLE";
/// ESPPロットのuserIdインデックス名の環境変数
pub const ESPP_LOTS_USER_INDEX_ENV: &str = "ESPP_LOTS_USER_INDEX";

/// デフォルトのユーザーテーブル名
pub const DEFAULT_USERS_TABLE: &str = "fife-users";
/// デフォルトのESPPロットテーブル名
pub const DEFAULT_ESPP_LOTS_TABLE: &str = "fife-espp-lots";
/// デフォルトのuserIdインデックス名
pub const DEFAULT_ESPP_LOTS_USER_INDEX: &str = "userId-index";

/// テーブル名とクライアントを持つDynamoDB設定
///
/// Lambdaのコールドスタート時に一度だけ構築し、
/// 以降の呼び出しではクライアントを使い回す。
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// ユーザーテーブル名
    users_table: String,
    /// ESPPロットテーブル名
    espp_lots_table: String,
    /// ESPPロットのuserIdセカンダリインデックス名
    espp_lots_user_index: String,
}

impl DynamoDbConfig {
    /// 環境からAWS設定を読み込み、テーブル名を環境変数から読み取って作成
    ///
    /// 環境変数:
    /// - AWS認証情報・リージョン: aws-configにより自動読み込み
    /// - USERS_TABLE: ユーザーテーブル名（デフォルト: fife-users）
    /// - ESPP_LOTS_TABLE: ESPPロットテーブル名（デフォルト: fife-espp-lots）
    /// - ESPP_LOTS_USER_INDEX: userIdインデックス名（デフォルト: userId-index）
    pub async fn from_env() -> Self {
        // 環境からAWS設定を読み込み（認証情報、リージョンなど）
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Self {
            client,
            users_table: env_or_default(USERS_TABLE_ENV, DEFAULT_USERS_TABLE),
            espp_lots_table: env_or_default(ESPP_LOTS_TABLE_ENV, DEFAULT_ESPP_LOTS_TABLE),
            espp_lots_user_index: env_or_default(
                ESPP_LOTS_USER_INDEX_ENV,
                DEFAULT_ESPP_LOTS_USER_INDEX,
            ),
        }
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    pub fn new(
        client: DynamoDbClient,
        users_table: String,
        espp_lots_table: String,
        espp_lots_user_index: String,
    ) -> Self {
        Self {
            client,
            users_table,
            espp_lots_table,
            espp_lots_user_index,
        }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// ユーザーテーブル名を取得
    pub fn users_table(&self) -> &str {
        &self.users_table
    }

    /// ESPPロットテーブル名を取得
    pub fn espp_lots_table(&self) -> &str {
        &self.espp_lots_table
    }

    /// userIdインデックス名を取得
    pub fn espp_lots_user_index(&self) -> &str {
        &self.espp_lots_user_index
    }
}

/// 環境変数を読み取り、未設定または空ならデフォルト値を返す
fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
