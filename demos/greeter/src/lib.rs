//! Library facade for the `greeter` demo so integration tests can build the
//! same command tree the binary runs.

pub mod cli;
pub mod error;
pub mod message;
