//! Request handler module
//!
//! Route table dispatch and the static responder behind it.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
