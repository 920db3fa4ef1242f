/// タイムスタンプ生成
///
/// createdAt / updatedAt に記録する現在時刻を生成する。
use chrono::{SecondsFormat, Utc};

/// 現在時刻をRFC3339形式のUTC文字列で取得（秒精度、`Z`サフィックス）
///
/// 例: `2023-01-01T00:00:00Z`
pub fn current_time_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
