/// DynamoDBのアイテム操作を抽象化するドキュメントストア
///
/// リポジトリはこのトレイト越しにストアへアクセスするため、
/// テストではインメモリ実装に差し替えられる。
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use thiserror::Error;

/// DynamoDBアイテム（属性名 -> 属性値）
pub type Item = HashMap<String, AttributeValue>;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// DynamoDBからの読み取りに失敗
    #[error("Read error: {0}")]
    ReadError(String),

    /// データのシリアライズ/デシリアライズに失敗
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_dynamo::Error> for RepositoryError {
    fn from(err: serde_dynamo::Error) -> Self {
        RepositoryError::SerializationError(err.to_string())
    }
}

/// キー・値形式のドキュメントストア
///
/// 各メソッドはストアへの1回の往復に対応する
/// （`query_index`のみ、ページングが続く限り繰り返す）。
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 主キーでアイテムを取得（存在しなければ`Ok(None)`）
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>, RepositoryError>;

    /// アイテムを無条件に書き込む（既存は上書き）
    async fn put_item(&self, table: &str, item: Item) -> Result<(), RepositoryError>;

    /// 指定属性を上書きし、更新後のアイテム全体を返す
    async fn update_item(
        &self,
        table: &str,
        key: Item,
        updates: Item,
    ) -> Result<Item, RepositoryError>;

    /// セカンダリインデックスをキー一致で検索
    async fn query_index(
        &self,
        table: &str,
        index: &str,
        key: Item,
    ) -> Result<Vec<Item>, RepositoryError>;

    /// 主キーでアイテムを削除（存在しなくても成功）
    async fn delete_item(&self, table: &str, key: Item) -> Result<(), RepositoryError>;
}

/// 式で使う属性名・属性値のプレースホルダー
#[derive(Debug, Default, PartialEq)]
struct ExpressionParts {
    clauses: Vec<String>,
    names: HashMap<String, String>,
    values: Item,
}

/// 属性ごとに`#{prefix}N = :{prefix}N`の句を組み立てる
///
/// 属性名は予約語と衝突しうるため、常にプレースホルダー経由で参照する。
/// 句の順序を安定させるため属性名でソートする。
fn build_expression_parts(prefix: &str, attributes: Item) -> ExpressionParts {
    let mut entries: Vec<(String, AttributeValue)> = attributes.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut parts = ExpressionParts::default();
    for (i, (name, value)) in entries.into_iter().enumerate() {
        let name_placeholder = format!("#{}{}", prefix, i);
        let value_placeholder = format!(":{}{}", prefix, i);

        parts
            .clauses
            .push(format!("{} = {}", name_placeholder, value_placeholder));
        parts.names.insert(name_placeholder, name);
        parts.values.insert(value_placeholder, value);
    }
    parts
}

/// DocumentStoreのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoDocumentStore {
    client: DynamoDbClient,
}

impl DynamoDocumentStore {
    /// 新しいDynamoDocumentStoreを作成
    pub fn new(client: DynamoDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentStore for DynamoDocumentStore {
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>, RepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| RepositoryError::ReadError(e.into_service_error().to_string()))?;

        Ok(result.item)
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<(), RepositoryError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn update_item(
        &self,
        table: &str,
        key: Item,
        updates: Item,
    ) -> Result<Item, RepositoryError> {
        let parts = build_expression_parts("u", updates);
        let update_expression = format!("SET {}", parts.clauses.join(", "));

        let result = self
            .client
            .update_item()
            .table_name(table)
            .set_key(Some(key))
            .update_expression(update_expression)
            .set_expression_attribute_names(Some(parts.names))
            .set_expression_attribute_values(Some(parts.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.into_service_error().to_string()))?;

        result.attributes.ok_or_else(|| {
            RepositoryError::SerializationError("UpdateItem returned no attributes".to_string())
        })
    }

    async fn query_index(
        &self,
        table: &str,
        index: &str,
        key: Item,
    ) -> Result<Vec<Item>, RepositoryError> {
        let parts = build_expression_parts("k", key);
        let key_condition = parts.clauses.join(" AND ");

        let mut items = Vec::new();
        let mut last_evaluated_key = None;

        // ページネーション: LastEvaluatedKeyがある限りクエリを続ける
        loop {
            let result = self
                .client
                .query()
                .table_name(table)
                .index_name(index)
                .key_condition_expression(&key_condition)
                .set_expression_attribute_names(Some(parts.names.clone()))
                .set_expression_attribute_values(Some(parts.values.clone()))
                .set_exclusive_start_key(last_evaluated_key)
                .send()
                .await
                .map_err(|e| RepositoryError::ReadError(e.into_service_error().to_string()))?;

            items.extend(result.items.unwrap_or_default());

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => last_evaluated_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<(), RepositoryError> {
        self.client
            .delete_item()
            .table_name(table)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }
}
