//! Record-handling patterns on a movie struct: direct field access, move
//! and borrow semantics, arrays of records, and owned heap allocation with
//! deterministic release.
//!
//! The heap portions mirror a manual allocate/release workflow while letting
//! ownership carry the exactly-once-release rule: allocation hands back an
//! owned handle, and release consumes it, so a second release or a use after
//! release does not compile.

pub mod input;
pub mod movie;
pub mod ownership;
pub mod store;

pub use movie::Movie;
