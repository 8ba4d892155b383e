//! Small helpers shared by the TcEx crates.

pub mod datetime;

pub use datetime::{TC_DATETIME_FORMAT, any_to_datetime, format_tc, from_epoch};
