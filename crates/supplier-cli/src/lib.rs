//! Library side of the `supplier-match` binary.

pub mod logging;
pub mod pipeline;
pub mod types;
