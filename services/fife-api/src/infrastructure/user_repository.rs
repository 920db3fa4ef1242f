/// ユーザーテーブルへのデータアクセス
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use super::document_store::{DocumentStore, Item, RepositoryError};
use crate::domain::{User, UserSettings, current_time_utc};

/// ユーザー操作用トレイト
///
/// ハンドラーはこのトレイト越しにユーザーを扱うため、
/// テストではストアなしで差し替えられる。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// userIdでユーザーを取得
    ///
    /// # 戻り値
    /// * 見つかった場合は`Ok(Some(User))`
    /// * 見つからなかった場合は`Ok(None)`
    /// * ストアまたはデシリアライズの失敗時は`Err(RepositoryError)`
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, RepositoryError>;

    /// ユーザー設定を上書きし、updatedAtを現在時刻に更新
    ///
    /// 更新後のユーザー全体を返す。事前の存在確認は行わない。
    async fn update_user_settings(
        &self,
        user_id: &str,
        settings: &UserSettings,
    ) -> Result<User, RepositoryError>;
}

/// DocumentStore上のUserRepository実装
#[derive(Debug, Clone)]
pub struct StoreUserRepository<S>
where
    S: DocumentStore,
{
    store: S,
    /// ユーザーテーブル名
    table_name: String,
}

impl<S> StoreUserRepository<S>
where
    S: DocumentStore,
{
    /// 新しいStoreUserRepositoryを作成
    pub fn new(store: S, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table_name: table_name.into(),
        }
    }

    fn key(user_id: &str) -> Item {
        HashMap::from([("userId".to_string(), AttributeValue::S(user_id.to_string()))])
    }
}

#[async_trait]
impl<S> UserRepository for StoreUserRepository<S>
where
    S: DocumentStore,
{
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, RepositoryError> {
        let item = self
            .store
            .get_item(&self.table_name, Self::key(user_id))
            .await?;

        match item {
            Some(item) => Ok(Some(serde_dynamo::from_item(item)?)),
            None => Ok(None),
        }
    }

    async fn update_user_settings(
        &self,
        user_id: &str,
        settings: &UserSettings,
    ) -> Result<User, RepositoryError> {
        let now = current_time_utc();

        let updates = HashMap::from([
            (
                "settings".to_string(),
                serde_dynamo::to_attribute_value::<_, AttributeValue>(settings)?,
            ),
            ("updatedAt".to_string(), AttributeValue::S(now)),
        ]);

        let attributes = self
            .store
            .update_item(&self.table_name, Self::key(user_id), updates)
            .await?;

        Ok(serde_dynamo::from_item(attributes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserFinanceSettings;
    use crate::infrastructure::document_store::tests::InMemoryDocumentStore;

    const TABLE: &str = "fife-users";

    fn create_test_repository() -> (StoreUserRepository<InMemoryDocumentStore>, InMemoryDocumentStore) {
        let store = InMemoryDocumentStore::new().with_table(TABLE, "userId");
        let repo = StoreUserRepository::new(store.clone(), TABLE);
        (repo, store)
    }

    fn sample_user() -> User {
        User {
            user_id: "user123".to_string(),
            settings: UserSettings {
                finance: UserFinanceSettings {
                    annual_salary: 100000.0,
                    paychecks_per_year: 26,
                },
            },
            created_at: "2023-01-01T00:00:00Z".to_string(),
            updated_at: "2023-01-02T00:00:00Z".to_string(),
        }
    }

    fn new_settings() -> UserSettings {
        UserSettings {
            finance: UserFinanceSettings {
                annual_salary: 120000.0,
                paychecks_per_year: 24,
            },
        }
    }

    // ==================== get_user ====================

    #[tokio::test]
    async fn test_get_user_found() {
        let (repo, store) = create_test_repository();
        store.seed(TABLE, serde_dynamo::to_item(sample_user()).unwrap());

        let user = repo.get_user("user123").await.unwrap();

        assert_eq!(user, Some(sample_user()));
    }

    #[tokio::test]
    async fn test_get_user_not_found_is_not_an_error() {
        let (repo, _) = create_test_repository();

        let user = repo.get_user("missing").await.unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_get_user_store_error() {
        let (repo, store) = create_test_repository();
        store.set_next_error(RepositoryError::ReadError("DynamoDB unavailable".to_string()));

        let result = repo.get_user("user123").await;

        assert_eq!(
            result.unwrap_err(),
            RepositoryError::ReadError("DynamoDB unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_user_malformed_item() {
        let (repo, store) = create_test_repository();
        store.seed(
            TABLE,
            HashMap::from([
                ("userId".to_string(), AttributeValue::S("user123".to_string())),
                ("settings".to_string(), AttributeValue::S("not a map".to_string())),
            ]),
        );

        let result = repo.get_user("user123").await;

        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::SerializationError(_)
        ));
    }

    // ==================== update_user_settings ====================

    #[tokio::test]
    async fn test_update_user_settings_overwrites_settings() {
        let (repo, store) = create_test_repository();
        store.seed(TABLE, serde_dynamo::to_item(sample_user()).unwrap());

        let updated = repo
            .update_user_settings("user123", &new_settings())
            .await
            .unwrap();

        assert_eq!(updated.user_id, "user123");
        assert_eq!(updated.settings, new_settings());
        assert_eq!(updated.created_at, "2023-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn test_update_user_settings_refreshes_updated_at() {
        let (repo, store) = create_test_repository();
        store.seed(TABLE, serde_dynamo::to_item(sample_user()).unwrap());

        let before = current_time_utc();
        let updated = repo
            .update_user_settings("user123", &new_settings())
            .await
            .unwrap();

        assert!(updated.updated_at >= before);
        assert!(updated.updated_at > sample_user().updated_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_update_user_settings_persists() {
        let (repo, store) = create_test_repository();
        store.seed(TABLE, serde_dynamo::to_item(sample_user()).unwrap());

        let updated = repo
            .update_user_settings("user123", &new_settings())
            .await
            .unwrap();
        let fetched = repo.get_user("user123").await.unwrap().unwrap();

        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_user_settings_single_store_call() {
        let (repo, store) = create_test_repository();
        store.seed(TABLE, serde_dynamo::to_item(sample_user()).unwrap());

        repo.update_user_settings("user123", &new_settings())
            .await
            .unwrap();

        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn test_update_user_settings_store_error() {
        let (repo, store) = create_test_repository();
        store.set_next_error(RepositoryError::WriteError("throttled".to_string()));

        let result = repo.update_user_settings("user123", &new_settings()).await;

        assert_eq!(
            result.unwrap_err(),
            RepositoryError::WriteError("throttled".to_string())
        );
    }

    /// 存在しないユーザーの更新ではcreatedAtを持たない疎なアイテムができ、
    /// Userとしてデシリアライズできないためエラーになる
    #[tokio::test]
    async fn test_update_user_settings_missing_user_is_error() {
        let (repo, _) = create_test_repository();

        let result = repo.update_user_settings("ghost", &new_settings()).await;

        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::SerializationError(_)
        ));
    }
}
