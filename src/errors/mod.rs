//! Error types for the scanners.
//!
//! Nothing here is recoverable. Every variant is a reason to stop the run:
//!
//! - I/O failures reading inputs or writing output
//! - Failures while walking the source tree
//! - Extraction patterns that do not compile
//!
//! Finding naming violations is not an error; it is reported as data.

pub mod errors;
