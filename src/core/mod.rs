pub mod editor;
pub mod enrich;
pub mod log;
pub mod logo;
pub mod notify;
pub mod projection;
pub mod selection;
pub mod store;
pub mod ui_state;
pub mod workbook;

pub use enrich::{CancelToken, EnrichmentReport, EnrichmentWorkflow};
pub use workbook::Workbook;
