//! # tcex-core
//!
//! Core crate for the TcEx SDK. Contains the unified error system, client
//! configuration, the [`traits::Transport`] contract that every HTTP
//! backend implements, paging parameters, and the tolerant date parser
//! used by date-typed filters.
//!
//! This crate has **no** internal dependencies on other TcEx crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
