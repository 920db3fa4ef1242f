/// ユーザーモデル
///
/// ユーザーはこのシステムの外で作成され、ここでは設定（settings）の
/// 読み取りと上書きのみを行う。
use serde::{Deserialize, Serialize};

/// 給与関連の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFinanceSettings {
    /// 年収
    pub annual_salary: f64,
    /// 年間の給与支払回数
    pub paychecks_per_year: u32,
}

/// ユーザー設定
///
/// 更新時はこの構造体全体が上書きされる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub finance: UserFinanceSettings,
}

/// ユーザー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 主キー
    pub user_id: String,
    pub settings: UserSettings,
    /// 作成日時（RFC3339 UTC）
    pub created_at: String,
    /// 更新日時（RFC3339 UTC）
    pub updated_at: String,
}
