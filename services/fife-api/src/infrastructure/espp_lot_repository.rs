/// ESPPロットテーブルへのデータアクセス
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use super::document_store::{DocumentStore, Item, RepositoryError};
use crate::domain::{EsppLot, EsppLotInput};

/// ESPPロット操作用トレイト
#[async_trait]
pub trait EsppLotRepository: Send + Sync {
    /// 入力から新しいロットを作成して保存
    ///
    /// IDとタイムスタンプはここで付与する。書き込みは無条件（upsert）。
    async fn create_espp_lot(&self, input: EsppLotInput) -> Result<EsppLot, RepositoryError>;

    /// IDでロットを取得（存在しなければ`Ok(None)`）
    async fn get_espp_lot(&self, id: &str) -> Result<Option<EsppLot>, RepositoryError>;

    /// ユーザーの全ロットをuserIdインデックスから取得
    ///
    /// 該当なしの場合は空のVecを返す。
    async fn get_espp_lots_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<EsppLot>, RepositoryError>;

    /// IDでロットを削除（存在しなくても成功）
    async fn delete_espp_lot(&self, id: &str) -> Result<(), RepositoryError>;
}

/// DocumentStore上のEsppLotRepository実装
#[derive(Debug, Clone)]
pub struct StoreEsppLotRepository<S>
where
    S: DocumentStore,
{
    store: S,
    /// ESPPロットテーブル名
    table_name: String,
    /// userIdセカンダリインデックス名
    user_index_name: String,
}

impl<S> StoreEsppLotRepository<S>
where
    S: DocumentStore,
{
    /// 新しいStoreEsppLotRepositoryを作成
    pub fn new(
        store: S,
        table_name: impl Into<String>,
        user_index_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            table_name: table_name.into(),
            user_index_name: user_index_name.into(),
        }
    }

    fn string_key(name: &str, value: &str) -> Item {
        HashMap::from([(name.to_string(), AttributeValue::S(value.to_string()))])
    }
}

#[async_trait]
impl<S> EsppLotRepository for StoreEsppLotRepository<S>
where
    S: DocumentStore,
{
    async fn create_espp_lot(&self, input: EsppLotInput) -> Result<EsppLot, RepositoryError> {
        let lot = EsppLot::new(input);

        let item: Item = serde_dynamo::to_item(&lot)?;
        self.store.put_item(&self.table_name, item).await?;

        Ok(lot)
    }

    async fn get_espp_lot(&self, id: &str) -> Result<Option<EsppLot>, RepositoryError> {
        let item = self
            .store
            .get_item(&self.table_name, Self::string_key("id", id))
            .await?;

        match item {
            Some(item) => Ok(Some(serde_dynamo::from_item(item)?)),
            None => Ok(None),
        }
    }

    async fn get_espp_lots_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<EsppLot>, RepositoryError> {
        let items = self
            .store
            .query_index(
                &self.table_name,
                &self.user_index_name,
                Self::string_key("userId", user_id),
            )
            .await?;

        Ok(serde_dynamo::from_items(items)?)
    }

    async fn delete_espp_lot(&self, id: &str) -> Result<(), RepositoryError> {
        self.store
            .delete_item(&self.table_name, Self::string_key("id", id))
            .await
    }
}
