// ドメイン層モジュール
pub mod domain;

// インフラストラクチャ層モジュール
pub mod infrastructure;

// アプリケーション層モジュール
pub mod application;
