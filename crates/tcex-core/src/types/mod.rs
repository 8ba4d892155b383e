//! Core type definitions used across the TcEx workspace.

pub mod pagination;

pub use pagination::PageParams;
