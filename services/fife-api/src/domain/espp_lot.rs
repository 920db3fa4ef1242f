/// ESPPロットモデル
///
/// 従業員株式購入制度（ESPP）で購入した株式の1バッチを表す。
/// 作成後の部分更新は行わない（作成・取得・削除のみ）。
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp::current_time_utc;

/// ESPPロット作成リクエストの入力
///
/// IDとタイムスタンプはサーバー側で付与するため含まない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsppLotInput {
    pub user_id: String,
    /// 付与日（検証しない不透明な文字列）
    pub grant_date: String,
    /// 購入日（検証しない不透明な文字列）
    pub purchase_date: String,
    pub offer_start_price: f64,
    pub offer_end_price: f64,
    pub purchase_price: f64,
    pub shares: f64,
}

/// 永続化されたESPPロット
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsppLot {
    /// 主キー（UUID v4）
    pub id: String,
    /// 所有ユーザーID（セカンダリインデックスのキー）
    pub user_id: String,
    pub grant_date: String,
    pub purchase_date: String,
    pub offer_start_price: f64,
    pub offer_end_price: f64,
    pub purchase_price: f64,
    pub shares: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl EsppLot {
    /// 入力から新しいESPPロットを構築
    ///
    /// IDには新しいUUID v4を割り当て、createdAtとupdatedAtには
    /// 同一の現在時刻を設定する。
    pub fn new(input: EsppLotInput) -> Self {
        let now = current_time_utc();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: input.user_id,
            grant_date: input.grant_date,
            purchase_date: input.purchase_date,
            offer_start_price: input.offer_start_price,
            offer_end_price: input.offer_end_price,
            purchase_price: input.purchase_price,
            shares: input.shares,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
