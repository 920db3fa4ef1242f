// アプリケーション層モジュール
pub mod create_espp_lot_handler;
pub mod delete_espp_lot_handler;
pub mod get_espp_lot_handler;
pub mod get_user_handler;
pub mod list_espp_lots_handler;
pub mod request;
pub mod response;
pub mod update_user_settings_handler;

// 再エクスポート
pub use create_espp_lot_handler::CreateEsppLotHandler;
pub use delete_espp_lot_handler::{DELETED_MESSAGE, DeleteEsppLotHandler};
pub use get_espp_lot_handler::GetEsppLotHandler;
pub use get_user_handler::GetUserHandler;
pub use list_espp_lots_handler::ListEsppLotsHandler;
pub use request::{PATH_LOT_ID, PATH_USER_ID, parse_json_body, require_path_parameter};
pub use response::{ApiError, MessageBody, api_response, build_json_headers};
pub use update_user_settings_handler::UpdateUserSettingsHandler;
