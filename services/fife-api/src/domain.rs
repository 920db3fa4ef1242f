// Domain layer modules
pub mod espp_lot;
pub mod timestamp;
pub mod user;

// Re-exports
pub use espp_lot::{EsppLot, EsppLotInput};
pub use timestamp::current_time_utc;
pub use user::{User, UserFinanceSettings, UserSettings};
