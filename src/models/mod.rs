pub mod email_status;
pub mod enrichment;
pub mod record;
pub mod record_field;

pub use email_status::EmailStatus;
pub use enrichment::EnrichmentResult;
pub use record::Record;
pub use record_field::RecordField;

/// Stable identity of a record inside one workbook.
pub type RecordId = u64;
