//! Shared test harness for the Voyager workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, then `build()` returns a [`TestContext`] backed by an in-memory SQLite database with
//! fixture helpers for inserting further records while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
