pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{encode_uri_component, truncate};
pub use time::format_timestamp;
