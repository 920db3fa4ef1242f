// Infrastructure layer modules
pub mod config;
pub mod document_store;
pub mod espp_lot_repository;
pub mod logging;
pub mod user_repository;

// Re-exports
pub use config::DynamoDbConfig;
pub use document_store::{DocumentStore, DynamoDocumentStore, Item, RepositoryError};
pub use espp_lot_repository::{EsppLotRepository, StoreEsppLotRepository};
pub use logging::init_logging;
pub use user_repository::{StoreUserRepository, UserRepository};
