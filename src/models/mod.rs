pub mod category;
pub mod field;
pub mod log;
pub mod priority;
pub mod record;
pub mod status;

pub use category::Category;
pub use field::Field;
pub use log::MaintenanceLog;
pub use priority::Priority;
pub use record::{MaintenanceRecord, PendingTask};
pub use status::Status;
