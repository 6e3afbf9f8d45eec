//! HTTP protocol layer module
//!
//! Range parsing, date validators and status responses, independent of the
//! fixture route table.

pub mod cache;
pub mod range;
pub mod response;

// Re-export commonly used types
pub use range::parse_range_header;
pub use response::{
    build_304_response, build_403_response, build_404_response, build_405_response,
    build_416_response, build_500_response, build_options_response, FileMeta,
};
