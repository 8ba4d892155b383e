//! Core traits defined in `tcex-core` and implemented by other crates.

pub mod transport;

pub use transport::{ApiRequest, ApiResponse, Method, Transport};
