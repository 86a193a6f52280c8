//! Data models used throughout the application
//!
//! Remote documents stay as `serde_json::Value`; the types here only cover the
//! parts this crate actually reads or produces.

// Minimal typed view of a block document
pub mod block;

// Transaction hash and the hash -> detail mapping
pub mod tx;
