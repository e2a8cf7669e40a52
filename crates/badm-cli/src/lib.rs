//! Library surface of the BADM reshape CLI: logging setup, pipeline
//! stages, and the result types the summary printer consumes.

pub mod logging;
pub mod pipeline;
pub mod types;
